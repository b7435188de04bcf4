use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

use crate::types::{
    is_locale_code,
    normalize_locale_code,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "supportedLocales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Locale active at startup.
    pub default_locale: String,

    /// Declared locale codes, in the order their affordance buttons
    /// appear on the page. Switching is only possible between these.
    pub supported_locales: Vec<String>,

    /// Separator used when flattening nested translation JSON into
    /// lookup keys.
    pub key_separator: String,

    pub translation_files: TranslationFilesConfig,

    pub diagnostics: DiagnosticsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslationFilesConfig {
    /// Pattern for translation files, relative to the locales root.
    pub file_pattern: String,
}

impl Default for TranslationFilesConfig {
    fn default() -> Self {
        Self { file_pattern: "**/*.json".to_string() }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosticsConfig {
    /// Log cross-locale key coverage gaps after loading.
    pub missing_translations: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self { missing_translations: true }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Empty or malformed locale codes
    /// - Duplicate supported locales
    /// - Default locale outside the supported set
    /// - Empty separator or invalid glob pattern
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.supported_locales.is_empty() {
            errors.push(ValidationError::new(
                "supportedLocales",
                "At least one locale is required. Example: [\"es\", \"en-us\"]",
            ));
        }

        let mut seen = Vec::new();
        for (index, locale) in self.supported_locales.iter().enumerate() {
            let normalized = normalize_locale_code(locale);
            if !is_locale_code(&normalized) {
                errors.push(ValidationError::new(
                    format!("supportedLocales[{index}]"),
                    format!("'{locale}' is not a valid language code. Example: \"en-us\""),
                ));
            } else if seen.contains(&normalized) {
                errors.push(ValidationError::new(
                    format!("supportedLocales[{index}]"),
                    format!("Locale '{normalized}' is declared more than once"),
                ));
            }
            seen.push(normalized);
        }

        let default = normalize_locale_code(&self.default_locale);
        if !is_locale_code(&default) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("'{}' is not a valid language code. Example: \"es\"", self.default_locale),
            ));
        } else if !seen.is_empty() && !seen.contains(&default) {
            errors.push(ValidationError::new(
                "defaultLocale",
                format!("Default locale '{default}' must be one of 'supportedLocales'"),
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if self.translation_files.file_pattern.is_empty() {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                "The pattern cannot be empty. Example: \"**/*.json\"",
            ));
        } else if let Err(e) = globset::Glob::new(&self.translation_files.file_pattern) {
            errors.push(ValidationError::new(
                "translationFiles.filePattern",
                format!("Invalid glob pattern '{}': {e}", self.translation_files.file_pattern),
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            default_locale: "es".to_string(),
            supported_locales: vec!["es".to_string(), "en-us".to_string()],
            key_separator: ".".to_string(),
            translation_files: TranslationFilesConfig::default(),
            diagnostics: DiagnosticsConfig::default(),
        }
    }
}
