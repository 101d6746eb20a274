use super::*;

fn nav() -> SectionHighlighter {
    SectionHighlighter::new(vec!["#home".into(), "#about".into(), "#projects".into(), "#contact".into()])
}

#[test]
fn starts_with_no_active_link() {
    assert_eq!(nav().active(), None);
}

#[test]
fn intersecting_section_marks_matching_link() {
    let mut hl = nav();
    assert_eq!(hl.observe(&[SectionEntry::new("projects", true)]), Some(Some(2)));
    assert_eq!(hl.active(), Some(2));
}

#[test]
fn non_intersecting_entries_change_nothing() {
    let mut hl = nav();
    hl.observe(&[SectionEntry::new("about", true)]);
    assert_eq!(hl.observe(&[SectionEntry::new("contact", false)]), None);
    assert_eq!(hl.active(), Some(1));
}

#[test]
fn last_intersecting_entry_wins() {
    let mut hl = nav();
    let batch = [
        SectionEntry::new("about", true),
        SectionEntry::new("home", false),
        SectionEntry::new("contact", true),
    ];
    assert_eq!(hl.observe(&batch), Some(Some(3)));
}

#[test]
fn section_without_link_clears_active() {
    let mut hl = nav();
    hl.observe(&[SectionEntry::new("about", true)]);
    assert_eq!(hl.observe(&[SectionEntry::new("testimonials", true)]), Some(None));
    assert_eq!(hl.active(), None);
}

#[test]
fn empty_batch_changes_nothing() {
    let mut hl = nav();
    assert_eq!(hl.observe(&[]), None);
}

#[test]
fn no_links_never_activates() {
    let mut hl = SectionHighlighter::new(Vec::new());
    assert_eq!(hl.observe(&[SectionEntry::new("about", true)]), Some(None));
}
