//! The two-valued theme and its wire representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// The display mode of the page: `light` or `dark`.
///
/// Serialized in lowercase everywhere it crosses a boundary — the
/// `localStorage` value, the `data-theme` attribute, and the `themechange`
/// event payload all carry the literal string `"light"` or `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The wire string for this theme.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon markup for the toggle button when this theme is active.
    ///
    /// Dark shows a sun (click to go light), light shows a moon. The markup
    /// is part of the page contract and is kept verbatim.
    #[must_use]
    pub fn icon_html(self) -> &'static str {
        match self {
            Self::Dark => r#"<i class="bi bi-sun-fill"></i>"#,
            Self::Light => r#"<i class="bi bi-moon-stars-fill"></i>"#,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_owned())),
        }
    }
}

/// Error returned when parsing a string that is neither `"light"` nor
/// `"dark"`, e.g. a corrupted `localStorage` value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme value: {0:?}")]
pub struct UnknownTheme(pub String);

/// Payload of the `themechange` event: `{ "theme": "dark" }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChangeDetail {
    pub theme: Theme,
}
