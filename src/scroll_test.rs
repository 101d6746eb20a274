#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// ScrollWatcher
// =============================================================

#[test]
fn watcher_starts_unscrolled() {
    let watcher = ScrollWatcher::new(100.0);
    assert!(!watcher.is_scrolled());
    assert_eq!(watcher.last_y(), 0.0);
}

#[test]
fn past_threshold_marks_scrolled() {
    let mut watcher = ScrollWatcher::new(100.0);
    assert!(watcher.observe(150.0));
    assert!(watcher.is_scrolled());
}

#[test]
fn exactly_threshold_is_not_scrolled() {
    let mut watcher = ScrollWatcher::new(100.0);
    assert!(!watcher.observe(100.0));
    assert!(watcher.observe(100.5));
}

#[test]
fn back_to_top_clears_mark() {
    let mut watcher = ScrollWatcher::new(100.0);
    watcher.observe(400.0);
    assert!(!watcher.observe(0.0));
    assert!(!watcher.is_scrolled());
}

#[test]
fn observe_is_idempotent() {
    let mut watcher = ScrollWatcher::new(100.0);
    assert!(watcher.observe(300.0));
    assert!(watcher.observe(300.0));
    assert_eq!(watcher.last_y(), 300.0);
}

// =============================================================
// Fragments and targets
// =============================================================

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#about"), Some("about"));
    assert_eq!(fragment_id("#contact-me"), Some("contact-me"));
}

#[test]
fn bare_hash_has_no_target() {
    assert_eq!(fragment_id("#"), None);
}

#[test]
fn non_fragment_href_has_no_target() {
    assert_eq!(fragment_id("https://example.com/#about"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn scroll_target_subtracts_header_and_gap() {
    assert_eq!(scroll_target(800.0, 70.0, 20.0), 710.0);
}

#[test]
fn scroll_target_may_be_negative_near_top() {
    assert_eq!(scroll_target(50.0, 70.0, 20.0), -40.0);
}
