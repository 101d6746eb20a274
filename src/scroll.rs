//! Scroll-position state for the header and smooth in-page navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Tracks whether the header should carry the `scrolled` class.
#[derive(Debug, Clone, Copy)]
pub struct ScrollWatcher {
    threshold: f64,
    scrolled: bool,
    last_y: f64,
}

impl ScrollWatcher {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, scrolled: false, last_y: 0.0 }
    }

    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub fn last_y(&self) -> f64 {
        self.last_y
    }

    /// Record a new vertical offset; returns whether the header should be
    /// marked. Strictly above the threshold counts as scrolled.
    pub fn observe(&mut self, y: f64) -> bool {
        self.scrolled = y > self.threshold;
        self.last_y = y;
        self.scrolled
    }
}

/// Extract the element id from an in-page `href` (`"#about"` → `"about"`).
///
/// A bare `#`, or an href that is not a fragment, has no target.
#[must_use]
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that puts a target just below a fixed header.
#[must_use]
pub fn scroll_target(target_offset_top: f64, header_height: f64, gap: f64) -> f64 {
    target_offset_top - header_height - gap
}
