//! Multilingual text values.
//!
//! Content fields on the public site are either a plain string or a mapping
//! from language code to string. Both shapes are stored as-is and resolved to
//! a display string in exactly one place ([`LocalizedText::resolve_or_key`])
//! so the fallback rules cannot drift between call sites.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Supported site languages. `tr` is the canonical language and the fallback
/// for every other language.
///
/// Declaration order matters: `BTreeMap<Language, _>` iterates in this order,
/// which defines the "first present value" fallback step of resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Tr,
    En,
    Fr,
    Ar,
    Ru,
    De,
}

/// All valid language code strings, in fallback order.
const VALID_LANGUAGE_CODES: &[&str] = &["tr", "en", "fr", "ar", "ru", "de"];

impl Language {
    /// Return the language as its lowercase ISO 639-1 code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
            Self::Fr => "fr",
            Self::Ar => "ar",
            Self::Ru => "ru",
            Self::De => "de",
        }
    }

    /// Parse a language from its lowercase code.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "tr" => Ok(Self::Tr),
            "en" => Ok(Self::En),
            "fr" => Ok(Self::Fr),
            "ar" => Ok(Self::Ar),
            "ru" => Ok(Self::Ru),
            "de" => Ok(Self::De),
            _ => Err(CoreError::Validation(format!(
                "Invalid language code '{s}'. Must be one of: {}",
                VALID_LANGUAGE_CODES.join(", ")
            ))),
        }
    }
}

/// A content field that is either a single plain string or a per-language map.
///
/// Serialized untagged, so `"Hello"` and `{"tr": "Merhaba", "en": "Hello"}`
/// both deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedText {
    Plain(String),
    Localized(BTreeMap<Language, String>),
}

impl LocalizedText {
    /// Build a map value with only the canonical `tr` entry.
    pub fn tr_only(text: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(Language::Tr, text.into());
        Self::Localized(map)
    }

    /// Resolve to a display string for the requested language.
    ///
    /// Precedence: exact non-empty match, then non-empty `tr`, then the first
    /// non-empty value in language order. A plain string always resolves to
    /// itself. Returns `None` only for a map with no non-empty entries.
    pub fn resolve(&self, lang: Language) -> Option<&str> {
        match self {
            Self::Plain(s) => Some(s.as_str()),
            Self::Localized(map) => map
                .get(&lang)
                .filter(|s| !s.is_empty())
                .or_else(|| map.get(&Language::Tr).filter(|s| !s.is_empty()))
                .or_else(|| map.values().find(|s| !s.is_empty()))
                .map(String::as_str),
        }
    }

    /// Resolve to a display string, falling back to the literal field key
    /// name when no translation is present at all. Total: never fails for
    /// any well-formed value.
    pub fn resolve_or_key(&self, lang: Language, key: &str) -> String {
        self.resolve(lang).unwrap_or(key).to_string()
    }

    /// Validate a value arriving on a write path.
    ///
    /// A plain string must be non-empty; a map must carry a non-empty `tr`
    /// entry, since `tr` is the fallback for every other language.
    pub fn validate(&self, field: &str) -> Result<(), CoreError> {
        match self {
            Self::Plain(s) if s.trim().is_empty() => Err(CoreError::Validation(format!(
                "Field '{field}' must not be empty"
            ))),
            Self::Plain(_) => Ok(()),
            Self::Localized(map) => match map.get(&Language::Tr) {
                Some(tr) if !tr.trim().is_empty() => Ok(()),
                _ => Err(CoreError::Validation(format!(
                    "Field '{field}' must contain a non-empty 'tr' entry"
                ))),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn map(entries: &[(Language, &str)]) -> LocalizedText {
        LocalizedText::Localized(
            entries
                .iter()
                .map(|(l, s)| (*l, s.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_exact_match_wins() {
        let value = map(&[(Language::Tr, "Merhaba"), (Language::En, "Hello")]);
        assert_eq!(value.resolve(Language::En), Some("Hello"));
    }

    #[test]
    fn test_missing_language_falls_back_to_tr() {
        let value = map(&[(Language::Tr, "Merhaba"), (Language::En, "Hello")]);
        assert_eq!(value.resolve(Language::De), Some("Merhaba"));
    }

    #[test]
    fn test_empty_exact_match_falls_back_to_tr() {
        let value = map(&[(Language::Tr, "Merhaba"), (Language::En, "")]);
        assert_eq!(value.resolve(Language::En), Some("Merhaba"));
    }

    #[test]
    fn test_missing_tr_falls_back_to_first_present() {
        let value = map(&[(Language::Fr, "Bonjour"), (Language::Ru, "Привет")]);
        assert_eq!(value.resolve(Language::De), Some("Bonjour"));
    }

    #[test]
    fn test_plain_string_resolves_to_itself() {
        let value = LocalizedText::Plain("Kurumsal".to_string());
        assert_eq!(value.resolve(Language::Ar), Some("Kurumsal"));
    }

    #[test]
    fn test_empty_map_resolves_to_key_name() {
        let value = LocalizedText::Localized(BTreeMap::new());
        assert_eq!(value.resolve(Language::Tr), None);
        assert_eq!(value.resolve_or_key(Language::Tr, "hero.title"), "hero.title");
    }

    #[test]
    fn test_resolution_is_total_for_all_languages() {
        let values = [
            LocalizedText::Plain("x".to_string()),
            map(&[(Language::Tr, "a")]),
            map(&[(Language::De, "b")]),
            LocalizedText::Localized(BTreeMap::new()),
        ];
        let langs = [
            Language::Tr,
            Language::En,
            Language::Fr,
            Language::Ar,
            Language::Ru,
            Language::De,
        ];
        for value in &values {
            for lang in langs {
                let resolved = value.resolve_or_key(lang, "key");
                assert!(!resolved.is_empty());
            }
        }
    }

    #[test]
    fn test_untagged_serde_round_trip() {
        let plain: LocalizedText = serde_json::from_str("\"Hello\"").unwrap();
        assert_eq!(plain, LocalizedText::Plain("Hello".to_string()));

        let localized: LocalizedText =
            serde_json::from_str(r#"{"tr": "Merhaba", "en": "Hello"}"#).unwrap();
        assert_eq!(localized.resolve(Language::En), Some("Hello"));

        let json = serde_json::to_value(&localized).unwrap();
        assert_eq!(json["tr"], "Merhaba");
    }

    #[test]
    fn test_validate_requires_tr_entry() {
        let missing = map(&[(Language::En, "Hello")]);
        assert_matches!(missing.validate("title"), Err(CoreError::Validation(_)));

        let blank_tr = map(&[(Language::Tr, "  ")]);
        assert_matches!(blank_tr.validate("title"), Err(CoreError::Validation(_)));

        let ok = map(&[(Language::Tr, "Merhaba")]);
        assert!(ok.validate("title").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_plain_string() {
        let empty = LocalizedText::Plain(String::new());
        assert_matches!(empty.validate("title"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn test_language_from_str_rejects_unknown_code() {
        assert_matches!(Language::from_str("jp"), Err(CoreError::Validation(_)));
        assert_eq!(Language::from_str("tr").unwrap(), Language::Tr);
    }
}
