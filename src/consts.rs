//! Shared constants for the page behavior crate.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key holding the current theme identifier.
pub const STORAGE_KEY: &str = "portfolio-theme";

// ── Timing ──────────────────────────────────────────────────────

/// Period of the theme auto-cycle timer, in milliseconds.
pub const CYCLE_INTERVAL_MS: u32 = 10_000;

/// Length of the theme transition window, in milliseconds.
pub const TRANSITION_MS: u32 = 800;

// ── Geometry ────────────────────────────────────────────────────

/// Vertical scroll offset above which the header is marked `scrolled`.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Extra gap left above a smooth-scroll target, below the header.
pub const ANCHOR_OFFSET_PX: f64 = 20.0;

/// Viewport margin for the section observer: top 100px and bottom half excluded.
pub const SECTION_ROOT_MARGIN: &str = "-100px 0px -50% 0px";

// ── DOM hooks ───────────────────────────────────────────────────

pub const SEL_MENU_TOGGLE: &str = ".menu-toggle";
pub const SEL_NAV_MENU: &str = ".nav-menu";
pub const SEL_NAV_LINKS: &str = ".nav-menu a";
pub const SEL_HEADER: &str = ".header-bar";
pub const SEL_THEME_SELECTOR: &str = ".theme-selector";
pub const SEL_THEME_TOGGLE: &str = ".theme-toggle";
pub const SEL_THEME_DROPDOWN: &str = ".theme-dropdown";
pub const SEL_THEME_OPTIONS: &str = ".theme-option";
pub const SEL_IN_PAGE_ANCHORS: &str = "a[href^=\"#\"]";
pub const SEL_SECTIONS: &str = "section[id]";

/// Element id of the auto-cycle start/pause control.
pub const ID_CYCLE_TOGGLE: &str = "autoCycleToggle";

pub const ATTR_THEME: &str = "data-theme";
pub const ATTR_PAGE_CONFIG: &str = "data-page-config";
pub const ATTR_ARIA_EXPANDED: &str = "aria-expanded";

pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_SHOW: &str = "show";

/// Markup for the cycle control while cycling.
pub const CYCLE_PAUSE_HTML: &str = "<span class=\"emoji\">⏸️</span> Pause";

/// Markup for the cycle control while stopped.
pub const CYCLE_START_HTML: &str = "<span class=\"emoji\">▶️</span> Start";
