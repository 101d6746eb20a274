//! Client-side behavior for the portfolio page.
//!
//! This crate is compiled to WebAssembly and loaded by the static page. It
//! owns every interactive behavior on the page: the mobile navigation menu,
//! the header scroll marker, the theme picker with persisted choice and
//! timed auto-cycling, smooth in-page scrolling, and highlighting the
//! navigation link for the section in view. The HTML and stylesheet only
//! provide the elements and the per-theme palettes.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::PageCore`] and the [`engine::Action`]s it emits |
//! | `page` | DOM host (wasm32 only): element lookup, listeners, timers, action execution |
//! | [`theme`] | The fixed, ordered [`theme::Theme`] set |
//! | [`theme_manager`] | Current theme, persistence, and the auto-cycle timer |
//! | [`nav`] | Mobile menu and theme picker open state |
//! | [`scroll`] | Header scroll marker and smooth-scroll target math |
//! | [`highlight`] | Active navigation link from section visibility |
//! | [`store`] | Single-key preference storage |
//! | [`config`] | [`config::PageConfig`] parsed from the root element |
//! | [`error`] | [`error::PageError`] |
//! | [`consts`] | Selectors, class names, and default timings |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod nav;
#[cfg(target_arch = "wasm32")]
pub mod page;
pub mod scroll;
pub mod store;
pub mod theme;
pub mod theme_manager;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// WASM entry point: install logging, then mount the page behavior.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }

    if let Err(err) = page::mount() {
        log::error!("page behavior failed to mount: {err}");
    }
}
