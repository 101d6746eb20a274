//! Open/closed state for the mobile navigation menu and the theme picker.
//!
//! Both are plain booleans kept next to the CSS class they drive, so the
//! host never has to read presentation back out of the DOM.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Mobile navigation menu (`.nav-menu.active`, `aria-expanded` on the toggle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force the menu closed, as any navigation link activation does.
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Theme picker dropdown (`.theme-dropdown.show`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemePicker {
    open: bool,
}

impl ThemePicker {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Flip the dropdown; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the dropdown; returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// `aria-expanded` attribute value for an open state.
#[must_use]
pub fn aria_expanded(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}
