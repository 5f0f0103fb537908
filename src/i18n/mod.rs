//! Bilingual (Arabic/English) text catalog.
//!
//! Templates are looked up by `(locale, key, plural category)`. Arabic is the
//! default language and English the fallback for missing keys.

mod catalog;
mod number;
mod plural;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use catalog::{Args, Catalog};
pub use number::{format_number, localize_digits};
pub use plural::PluralCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    /// Unicode mark that sets the base direction of a line for bidi-aware terminals.
    pub fn mark(self) -> char {
        match self {
            TextDirection::Rtl => '\u{200F}',
            TextDirection::Ltr => '\u{200E}',
        }
    }
}

impl Locale {
    /// Locale consulted when the active one lacks a key.
    pub const FALLBACK: Locale = Locale::En;

    pub fn code(self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn direction(self) -> TextDirection {
        match self {
            Locale::Ar => TextDirection::Rtl,
            Locale::En => TextDirection::Ltr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" => Ok(Locale::Ar),
            "en" => Ok(Locale::En),
            other => Err(I18nError::UnknownLocale(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),
    #[error("Invalid catalog for {locale}: {source}")]
    InvalidCatalog {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },
}
