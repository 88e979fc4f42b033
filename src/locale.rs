//! Locale codes and locale-keyed display text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Locales served by the catalog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Russian
    Ru,
    /// English
    #[default]
    En,
    /// Uzbek
    Uz,
    /// Kazakh
    Kz,
    /// Korean
    Ko,
}

impl Locale {
    /// Every supported locale.
    pub const ALL: [Locale; 5] = [Locale::Ru, Locale::En, Locale::Uz, Locale::Kz, Locale::Ko];

    /// Locales tried after `ru` and `en` when resolving localized text.
    const SECONDARY: [Locale; 3] = [Locale::Uz, Locale::Kz, Locale::Ko];

    /// Code used as the key in locale-keyed JSON objects.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Ru => "ru",
            Locale::En => "en",
            Locale::Uz => "uz",
            Locale::Kz => "kz",
            Locale::Ko => "ko",
        }
    }

    /// Parses a locale code. Unknown codes get no exact match anywhere,
    /// so they are not representable.
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ru" => Some(Locale::Ru),
            "en" => Some(Locale::En),
            "uz" => Some(Locale::Uz),
            "kz" => Some(Locale::Kz),
            "ko" => Some(Locale::Ko),
            _ => None,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Locale code outside the supported set.
#[derive(Error, Debug)]
#[error("unsupported locale code: {0}")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLocale(s.to_string()))
    }
}

/// Display text that is either a plain string or a mapping from locale
/// code to string, as stored in the catalog's JSONB columns.
///
/// Any JSON shape deserializes into this type. Resolution degrades to
/// an empty string on unexpected shapes instead of failing.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(Value);

impl LocalizedText {
    /// Wraps a raw JSON value.
    pub fn new(value: Value) -> Self {
        LocalizedText(value)
    }

    /// Resolves the best display string for `locale`.
    ///
    /// Fallback chain: requested locale, then `ru`, then `en`, then
    /// `uz`/`kz`/`ko`, then the first non-blank field in key order,
    /// then the empty string. Plain strings are returned trimmed.
    pub fn get(&self, locale: Locale) -> String {
        match &self.0 {
            Value::String(text) => text.trim().to_string(),
            Value::Object(fields) => {
                if let Some(text) = exact(fields, locale.code()) {
                    return text;
                }
                if locale != Locale::Ru {
                    if let Some(text) = exact(fields, "ru") {
                        return text;
                    }
                }
                if let Some(text) = exact(fields, "en") {
                    return text;
                }
                for fallback in Locale::SECONDARY {
                    if let Some(text) = exact(fields, fallback.code()) {
                        return text;
                    }
                }
                fields
                    .values()
                    .find_map(|value| match value {
                        Value::String(text) if !text.trim().is_empty() => {
                            Some(text.trim().to_string())
                        }
                        _ => None,
                    })
                    .unwrap_or_default()
            }
            _ => String::new(),
        }
    }

    /// Resolves like [`LocalizedText::get`] but substitutes `fallback`
    /// for an empty result.
    pub fn get_or(&self, locale: Locale, fallback: &str) -> String {
        let value = self.get(locale);
        if value.is_empty() {
            fallback.to_string()
        } else {
            value
        }
    }
}

/// Non-empty string stored under `code`, trimmed. Non-string values are
/// ignored as if the key were absent.
fn exact(fields: &Map<String, Value>, code: &str) -> Option<String> {
    match fields.get(code) {
        Some(Value::String(text)) if !text.is_empty() => Some(text.trim().to_string()),
        _ => None,
    }
}
