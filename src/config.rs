//! Page configuration parsed from the root element.
//!
//! The host page may carry a JSON object in `<html data-page-config="...">`
//! to override timings and thresholds. Every field is optional; missing
//! fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{ANCHOR_OFFSET_PX, CYCLE_INTERVAL_MS, SCROLL_THRESHOLD_PX, STORAGE_KEY, TRANSITION_MS};
use crate::error::PageError;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub scroll_threshold_px: f64,
    pub anchor_offset_px: f64,
    pub cycle_interval_ms: u32,
    pub transition_ms: u32,
    /// Theme used when storage holds nothing usable.
    pub default_theme: Theme,
    /// Whether auto-cycling starts at load.
    pub auto_cycle: bool,
    pub storage_key: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: SCROLL_THRESHOLD_PX,
            anchor_offset_px: ANCHOR_OFFSET_PX,
            cycle_interval_ms: CYCLE_INTERVAL_MS,
            transition_ms: TRANSITION_MS,
            default_theme: Theme::DarkPurple,
            auto_cycle: true,
            storage_key: STORAGE_KEY.to_owned(),
        }
    }
}

impl PageConfig {
    /// Build config from the raw `data-page-config` attribute value.
    ///
    /// An absent or blank attribute yields the defaults.
    pub fn from_attr(raw: Option<&str>) -> Result<Self, PageError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    /// CSS `transition` value for the theme change window.
    #[must_use]
    pub fn transition_css(&self) -> String {
        format!("all {}s ease-in-out", f64::from(self.transition_ms) / 1000.0)
    }
}
