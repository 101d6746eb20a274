//! Durable storage for the theme preference.
//!
//! The page persists exactly one value: the current theme identifier under a
//! single key. [`LocalStore`] writes it to `window.localStorage`;
//! [`MemoryStore`] backs the browser-free tests.
//!
//! Persistence is best-effort: a browser that refuses storage (private mode,
//! quota) still gets a working page, it just forgets the choice.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;

use web_sys::Storage;

/// Single-key string storage.
pub trait PreferenceStore {
    /// Read the raw stored value for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    fn save(&mut self, key: &str, value: &str);
}

/// `window.localStorage`, when the browser grants it.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Bind to the window's local storage.
    #[must_use]
    pub fn new(window: &web_sys::Window) -> Self {
        let storage = match window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::warn!("localStorage unavailable: {err:?}");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("failed to read {key}: {err:?}");
                None
            }
        }
    }

    fn save(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}: {err:?}");
        }
    }
}

/// In-memory store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.save(key, value);
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}
