//! Dictionary store: one translation table per locale.
//!
//! Tables are assembled once (programmatically or from JSON translation
//! files on disk) and read-only afterwards. A key missing from one
//! locale's table is a per-key miss at lookup time, never a whole-locale
//! failure; a *table* missing for a declared locale is a construction
//! error.

use std::collections::{
    HashMap,
    HashSet,
};
use std::path::Path;

use globset::Glob;
use ignore::WalkBuilder;
use serde_json::Value;
use thiserror::Error;

use crate::config::I18nSettings;
use crate::types::{
    is_locale_code,
    normalize_locale_code,
};

/// Errors raised while assembling a dictionary.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The configured translation file pattern is not a valid glob.
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidFilePattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// A translation file could not be read.
    #[error("Failed to read translation file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A translation file is not valid JSON.
    #[error("Failed to parse translation file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// A declared locale ended up without a table.
    #[error("No translation table for supported locale '{locale}'")]
    MissingLocaleTable { locale: String },
}

/// The key→string mapping for a single locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleTable {
    entries: HashMap<String, String>,
}

impl LocaleTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. A duplicate key overwrites the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Looks up the display string for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all keys in this table.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Merges another table into this one. Entries of `other` win on
    /// key collisions.
    pub fn merge(&mut self, other: Self) {
        self.entries.extend(other.entries);
    }
}

impl From<HashMap<String, String>> for LocaleTable {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

/// All locale tables, keyed by normalized locale code.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    tables: HashMap<String, LocaleTable>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table for a locale. Adding to an existing locale merges
    /// into its table (multiple translation files per locale).
    pub fn add_table(&mut self, locale: &str, table: LocaleTable) {
        let locale = normalize_locale_code(locale);
        match self.tables.get_mut(&locale) {
            Some(existing) => existing.merge(table),
            None => {
                self.tables.insert(locale, table);
            }
        }
    }

    /// Returns the string for `key` in `locale`'s table, if present.
    ///
    /// Both an unknown locale and a key missing from a known locale's
    /// table are a plain `None`; neither is an error here.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.table(locale).and_then(|table| table.get(key))
    }

    /// Returns the table for a locale.
    #[must_use]
    pub fn table(&self, locale: &str) -> Option<&LocaleTable> {
        self.tables.get(&normalize_locale_code(locale))
    }

    /// Whether a table exists for the locale.
    #[must_use]
    pub fn has_locale(&self, locale: &str) -> bool {
        self.table(locale).is_some()
    }

    /// All locale codes with a table, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Verifies that every given locale has a table.
    ///
    /// # Errors
    /// `DictionaryError::MissingLocaleTable` for the first locale
    /// without one.
    pub fn ensure_tables(&self, locales: &[String]) -> Result<(), DictionaryError> {
        for locale in locales {
            if !self.has_locale(locale) {
                return Err(DictionaryError::MissingLocaleTable {
                    locale: normalize_locale_code(locale),
                });
            }
        }
        Ok(())
    }

    /// All unique keys across every table, sorted.
    #[must_use]
    pub fn all_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> =
            self.tables.values().flat_map(|table| table.keys().map(String::from)).collect();
        keys.sort_unstable();
        keys.dedup();
        keys
    }

    /// Keys present in some other locale's table but absent from
    /// `locale`'s, sorted. An unknown locale is missing everything.
    #[must_use]
    pub fn missing_keys(&self, locale: &str) -> Vec<String> {
        let all = self.all_keys();
        match self.table(locale) {
            Some(table) => all.into_iter().filter(|key| table.get(key).is_none()).collect(),
            None => all,
        }
    }
}

/// Flatten nested JSON into a separator-joined key map.
///
/// Array elements get index keys (`items[0]`); non-string leaves are
/// stringified.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use site_i18n::dictionary::flatten_json;
///
/// let json = json!({ "nav": { "inicio": "Inicio" } });
/// let flattened = flatten_json(&json, ".", None);
/// assert_eq!(flattened.get("nav.inicio"), Some(&"Inicio".to_string()));
/// ```
#[must_use]
pub fn flatten_json(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
) -> HashMap<String, String> {
    let mut result = HashMap::new();
    flatten_json_value(json, separator, prefix, &mut result);
    result
}

fn flatten_json_value(
    json: &Value,
    separator: &str,
    prefix: Option<&str>,
    result: &mut HashMap<String, String>,
) {
    match json {
        Value::Object(map) => {
            for (key, value) in map {
                let full_key =
                    prefix.map_or_else(|| key.clone(), |p| format!("{p}{separator}{key}"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::Array(arr) => {
            for (index, value) in arr.iter().enumerate() {
                let full_key =
                    prefix.map_or_else(|| format!("[{index}]"), |p| format!("{p}[{index}]"));
                flatten_json_value(value, separator, Some(&full_key), result);
            }
        }
        Value::String(s) => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), s.clone());
            }
        }
        _ => {
            if let Some(key) = prefix {
                result.insert(key.to_string(), json.to_string());
            }
        }
    }
}

/// Derives the locale a translation file belongs to from its name
/// (`locales/en-us.json` → `en-us`).
fn locale_from_path(path: &Path) -> Option<String> {
    let stem = path.file_stem()?.to_string_lossy();
    let normalized = normalize_locale_code(&stem);
    is_locale_code(&normalized).then_some(normalized)
}

fn load_table(path: &Path, separator: &str) -> Result<LocaleTable, DictionaryError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| DictionaryError::Io { path: path.display().to_string(), source: e })?;

    let json: Value = serde_json::from_str(&content)
        .map_err(|e| DictionaryError::Parse { path: path.display().to_string(), source: e })?;

    Ok(LocaleTable::from(flatten_json(&json, separator, None)))
}

/// Loads a dictionary from the translation files under `root`.
///
/// Files are discovered by walking `root` and matching
/// `translationFiles.filePattern`; each file's locale comes from its
/// name. Files whose name is not locale-shaped, or whose locale is not
/// declared in `supportedLocales`, are skipped with a log entry. After
/// loading, every declared locale must have a table and cross-locale
/// key coverage gaps are logged.
///
/// # Errors
/// - Invalid file pattern
/// - File read or JSON parse failure
/// - A declared locale without a translation file
pub fn load_dictionary(root: &Path, settings: &I18nSettings) -> Result<Dictionary, DictionaryError> {
    let pattern = &settings.translation_files.file_pattern;
    let matcher = Glob::new(pattern)
        .map_err(|e| DictionaryError::InvalidFilePattern { pattern: pattern.clone(), source: e })?
        .compile_matcher();

    let supported: HashSet<String> =
        settings.supported_locales.iter().map(|l| normalize_locale_code(l)).collect();

    let mut dictionary = Dictionary::new();

    for result in WalkBuilder::new(root).hidden(false).follow_links(false).build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(?err, "Failed to read directory entry");
                continue;
            }
        };

        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        if !matcher.is_match(relative) {
            continue;
        }

        let Some(locale) = locale_from_path(path) else {
            tracing::warn!(path = %path.display(), "Skipping translation file without a locale-shaped name");
            continue;
        };

        if !supported.contains(&locale) {
            tracing::debug!(%locale, path = %path.display(), "Skipping translation file for undeclared locale");
            continue;
        }

        let table = load_table(path, &settings.key_separator)?;
        tracing::debug!(%locale, entries = table.len(), path = %path.display(), "Loaded translation file");
        dictionary.add_table(&locale, table);
    }

    dictionary.ensure_tables(&settings.supported_locales)?;

    if settings.diagnostics.missing_translations {
        for locale in &settings.supported_locales {
            let missing = dictionary.missing_keys(locale);
            if !missing.is_empty() {
                tracing::warn!(
                    locale = %normalize_locale_code(locale),
                    count = missing.len(),
                    "Locale table is missing keys present in other locales"
                );
            }
        }
    }

    Ok(dictionary)
}
