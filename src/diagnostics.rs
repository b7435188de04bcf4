//! Diagnostic values produced by a binder pass.
//!
//! Translation failures are never fatal: the binder records one
//! diagnostic per failing element and keeps going. Callers decide what
//! to do with the collected list (the demo binary just logs it).

/// What went wrong for a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The element's key is absent from the given locale's table.
    MissingTranslation {
        /// Locale whose table was consulted.
        locale: String,
        /// Key that had no entry.
        key: String,
    },
    /// The element is tagged as translatable but its key is empty.
    MissingTagValue,
}

/// A single non-fatal translation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn missing_translation(locale: &str, key: &str) -> Self {
        Self {
            message: format!("Translation key '{key}' not found in locale '{locale}'"),
            kind: DiagnosticKind::MissingTranslation {
                locale: locale.to_string(),
                key: key.to_string(),
            },
        }
    }

    pub(crate) fn missing_tag_value() -> Self {
        Self {
            message: "Translatable element has an empty translation key".to_string(),
            kind: DiagnosticKind::MissingTagValue,
        }
    }
}
