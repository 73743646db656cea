use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::corpus::CorpusError;

/// A single entry of the localization corpus.
///
/// The `id` is the canonical key and is unique across the store. It is
/// immutable once created; renaming a key is a delete followed by a create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRecord {
    /// Canonical key, unique across the store.
    pub id: String,
    /// Default-language text as last seen in the application source.
    pub source_text: String,
    /// Target-language text. `None` means untranslated.
    pub translated_text: Option<String>,
}

impl TranslationRecord {
    /// Returns `true` if the record carries a non-empty translation.
    pub fn is_translated(&self) -> bool {
        self.translated_text
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}

/// A text key currently referenced by the surrounding application,
/// as reported by a [`KeySource`](crate::corpus::KeySource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveKey {
    pub id: String,
    pub source_text: String,
}

/// Classification filter for corpus queries.
///
/// Every record falls into exactly one class relative to the live key set:
/// - `Complete`: live and carrying a non-empty translation
/// - `Dead`: persisted but no longer referenced by the application
/// - `Untranslated`: live but with no (non-empty) persisted translation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Complete,
    Dead,
    Untranslated,
}

impl Filter {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Complete => "complete",
            Self::Dead => "dead",
            Self::Untranslated => "untranslated",
        }
    }
}

impl FromStr for Filter {
    type Err = CorpusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "complete" => Ok(Self::Complete),
            "dead" => Ok(Self::Dead),
            "untranslated" => Ok(Self::Untranslated),
            other => Err(CorpusError::InvalidFilter(other.to_string())),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parses_known_names() {
        assert_eq!("complete".parse::<Filter>().unwrap(), Filter::Complete);
        assert_eq!("dead".parse::<Filter>().unwrap(), Filter::Dead);
        assert_eq!(
            "untranslated".parse::<Filter>().unwrap(),
            Filter::Untranslated
        );
    }

    #[test]
    fn test_filter_rejects_unknown_name() {
        let err = "stale".parse::<Filter>().unwrap_err();
        assert!(matches!(err, CorpusError::InvalidFilter(ref name) if name == "stale"));
    }

    #[test]
    fn test_is_translated_treats_empty_as_absent() {
        let record = TranslationRecord {
            id: "greeting".to_string(),
            source_text: "你好".to_string(),
            translated_text: Some(String::new()),
        };
        assert!(!record.is_translated());

        let record = TranslationRecord {
            translated_text: Some("Hello".to_string()),
            ..record
        };
        assert!(record.is_translated());
    }
}
