//! Active navigation link derived from section visibility.
//!
//! The host observes every `section[id]` and forwards intersection entries
//! here in callback order. Each intersecting entry clears every link and
//! re-marks the one pointing at that section, so the last intersecting entry
//! in a batch decides the result.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

/// One intersection observer entry, reduced to what the highlighter reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: String,
    pub is_intersecting: bool,
}

impl SectionEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, is_intersecting: bool) -> Self {
        Self { id: id.into(), is_intersecting }
    }
}

/// Navigation links by `href`, with at most one marked active.
#[derive(Debug, Clone, Default)]
pub struct SectionHighlighter {
    hrefs: Vec<String>,
    active: Option<usize>,
}

impl SectionHighlighter {
    /// `hrefs` holds each navigation link's `href`, in document order.
    #[must_use]
    pub fn new(hrefs: Vec<String>) -> Self {
        Self { hrefs, active: None }
    }

    /// Index of the link currently marked active.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Apply a batch of entries. Returns the new active link when any entry
    /// was intersecting, `None` when the batch changes nothing.
    pub fn observe(&mut self, entries: &[SectionEntry]) -> Option<Option<usize>> {
        let mut touched = false;
        for entry in entries.iter().filter(|e| e.is_intersecting) {
            let wanted = format!("#{}", entry.id);
            self.active = self.hrefs.iter().position(|href| *href == wanted);
            touched = true;
        }
        touched.then_some(self.active)
    }
}
