//! Error type for mounting and driving the page behavior.

use wasm_bindgen::JsValue;

/// Failure surfaced by the DOM host or configuration parsing.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// No global `window` (not running in a browser).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
    /// The `data-page-config` attribute is not valid config JSON.
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
