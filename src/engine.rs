use crate::config::PageConfig;
use crate::highlight::{SectionEntry, SectionHighlighter};
use crate::nav::{NavMenu, ThemePicker};
use crate::scroll::{ScrollWatcher, scroll_target};
use crate::store::PreferenceStore;
use crate::theme::Theme;
use crate::theme_manager::{ThemeManager, TimerToken};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from event handlers for the host to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Write `data-theme` on the root element and the picker toggle label.
    SetTheme(Theme),
    /// Store the theme identifier under the configured key.
    PersistTheme(Theme),
    /// Set the root transition style and schedule its clear.
    BeginTransition { token: TimerToken, duration_ms: u32 },
    /// Remove the root transition style.
    EndTransition,
    /// Start a repeating cycle timer, replacing any live one.
    StartCycleTimer { token: TimerToken, interval_ms: u32 },
    /// Drop the live cycle timer.
    CancelCycleTimer,
    /// Show the pause (`running`) or start affordance on the cycle control.
    SetCycleControl { running: bool },
    /// Mobile menu `active` class and the toggle's `aria-expanded`.
    SetMenuOpen(bool),
    /// Theme dropdown `show` class.
    SetPickerOpen(bool),
    /// Header `scrolled` class.
    SetHeaderScrolled(bool),
    /// Smooth-scroll the window to a vertical offset.
    ScrollTo { top: f64 },
    /// Mark the navigation link at this index active, clearing the others.
    SetActiveLink(Option<usize>),
}

/// Layout of an in-page anchor's target at click time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorTarget {
    pub offset_top: f64,
    pub header_height: f64,
}

/// Core page state: every decision that doesn't need the DOM.
///
/// Separated from `Page` so it can be tested without WASM/browser dependencies.
pub struct PageCore {
    config: PageConfig,
    theme: ThemeManager,
    menu: NavMenu,
    picker: ThemePicker,
    scroll: ScrollWatcher,
    sections: SectionHighlighter,
}

impl PageCore {
    /// Build the page state at load.
    ///
    /// `nav_hrefs` are the navigation links' `href` values in document order.
    /// The returned actions render the initial theme and start auto-cycling.
    pub fn load(config: PageConfig, store: &impl PreferenceStore, nav_hrefs: Vec<String>) -> (Self, Vec<Action>) {
        let mut out = Vec::new();
        let stored = store.load(&config.storage_key);
        let theme = ThemeManager::load(&config, stored.as_deref(), &mut out);
        let core = Self {
            theme,
            menu: NavMenu::default(),
            picker: ThemePicker::default(),
            scroll: ScrollWatcher::new(config.scroll_threshold_px),
            sections: SectionHighlighter::new(nav_hrefs),
            config,
        };
        (core, out)
    }

    // --- Navigation ---

    /// The mobile menu toggle was clicked.
    pub fn menu_toggled(&mut self) -> Vec<Action> {
        vec![Action::SetMenuOpen(self.menu.toggle())]
    }

    /// A navigation link was clicked.
    pub fn nav_link_activated(&mut self) -> Vec<Action> {
        self.menu.close();
        vec![Action::SetMenuOpen(false)]
    }

    // --- Scroll ---

    /// The window scrolled to vertical offset `y`.
    pub fn scrolled(&mut self, y: f64) -> Vec<Action> {
        vec![Action::SetHeaderScrolled(self.scroll.observe(y))]
    }

    /// An in-page anchor was clicked. `target` is `None` when the fragment
    /// names no element.
    #[must_use]
    pub fn anchor_activated(&self, target: Option<AnchorTarget>) -> Vec<Action> {
        let Some(target) = target else {
            return Vec::new();
        };
        let top = scroll_target(target.offset_top, target.header_height, self.config.anchor_offset_px);
        vec![Action::ScrollTo { top }]
    }

    /// Intersection entries for observed sections, in callback order.
    pub fn sections_observed(&mut self, entries: &[SectionEntry]) -> Vec<Action> {
        match self.sections.observe(entries) {
            Some(active) => vec![Action::SetActiveLink(active)],
            None => Vec::new(),
        }
    }

    // --- Theme picker ---

    /// The picker toggle was clicked.
    pub fn picker_toggled(&mut self) -> Vec<Action> {
        vec![Action::SetPickerOpen(self.picker.toggle())]
    }

    /// A click reached the document outside the picker.
    pub fn document_clicked(&mut self) -> Vec<Action> {
        if self.picker.close() {
            vec![Action::SetPickerOpen(false)]
        } else {
            Vec::new()
        }
    }

    /// A picker option carrying `data-theme="<raw>"` was clicked.
    ///
    /// Identifiers outside the fixed theme set are rejected.
    pub fn theme_option_chosen(&mut self, raw: &str) -> Vec<Action> {
        let Some(theme) = Theme::from_id(raw) else {
            log::warn!("ignoring unknown theme option {raw:?}");
            return Vec::new();
        };
        let mut out = Vec::new();
        self.theme.select(theme, &mut out);
        self.picker.close();
        out.push(Action::SetPickerOpen(false));
        out
    }

    // --- Auto-cycle ---

    /// The start/pause control was clicked.
    pub fn cycle_toggled(&mut self) -> Vec<Action> {
        let mut out = Vec::new();
        self.theme.toggle_cycle(&mut out);
        out
    }

    /// A cycle timer fired.
    pub fn cycle_tick(&mut self, token: TimerToken) -> Vec<Action> {
        let mut out = Vec::new();
        self.theme.on_cycle_tick(token, &mut out);
        out
    }

    /// A transition-clear timeout fired.
    pub fn transition_elapsed(&mut self, token: TimerToken) -> Vec<Action> {
        let mut out = Vec::new();
        self.theme.on_transition_elapsed(token, &mut out);
        out
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    #[must_use]
    pub fn picker_open(&self) -> bool {
        self.picker.is_open()
    }

    #[must_use]
    pub fn header_scrolled(&self) -> bool {
        self.scroll.is_scrolled()
    }

    #[must_use]
    pub fn active_link(&self) -> Option<usize> {
        self.sections.active()
    }
}
