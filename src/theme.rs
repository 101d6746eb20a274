//! The fixed, ordered set of page themes.
//!
//! A theme is applied by writing its identifier to the root element's
//! `data-theme` attribute; the stylesheet owns the palettes. The order of
//! [`Theme::ALL`] is the auto-cycle order.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an identifier that names no theme.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0:?}")]
pub struct UnknownTheme(pub String);

/// One of the five page palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    DarkPurple,
    Light,
    Ocean,
    Forest,
    Sunset,
}

impl Theme {
    /// All themes in cycle order.
    pub const ALL: [Theme; 5] = [Self::DarkPurple, Self::Light, Self::Ocean, Self::Forest, Self::Sunset];

    /// Identifier written to `data-theme` and to storage.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::DarkPurple => "dark-purple",
            Self::Light => "light",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
        }
    }

    /// Human-readable name shown on the picker toggle.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DarkPurple => "Dark Purple",
            Self::Light => "Light Blue",
            Self::Ocean => "Ocean Blue",
            Self::Forest => "Forest Green",
            Self::Sunset => "Sunset Orange",
        }
    }

    /// Position in [`Theme::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::DarkPurple => 0,
            Self::Light => 1,
            Self::Ocean => 2,
            Self::Forest => 3,
            Self::Sunset => 4,
        }
    }

    /// The following theme in cycle order, wrapping after the last.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Look up a theme by identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|theme| theme.id() == id)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| UnknownTheme(s.to_owned()))
    }
}
