use super::*;

// =============================================================
// NavMenu
// =============================================================

#[test]
fn menu_starts_closed() {
    assert!(!NavMenu::default().is_open());
}

#[test]
fn menu_toggle_flips_state() {
    let mut menu = NavMenu::default();
    assert!(menu.toggle());
    assert!(menu.is_open());
    assert!(!menu.toggle());
    assert!(!menu.is_open());
}

#[test]
fn menu_close_is_idempotent() {
    let mut menu = NavMenu::default();
    menu.toggle();
    menu.close();
    assert!(!menu.is_open());
    menu.close();
    assert!(!menu.is_open());
}

// =============================================================
// ThemePicker
// =============================================================

#[test]
fn picker_starts_closed() {
    assert!(!ThemePicker::default().is_open());
}

#[test]
fn picker_close_reports_previous_state() {
    let mut picker = ThemePicker::default();
    assert!(!picker.close());
    picker.toggle();
    assert!(picker.close());
    assert!(!picker.is_open());
}

// =============================================================
// aria-expanded
// =============================================================

#[test]
fn aria_expanded_values() {
    assert_eq!(aria_expanded(true), "true");
    assert_eq!(aria_expanded(false), "false");
}
