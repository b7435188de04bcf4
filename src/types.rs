//! Core types used throughout the project.

/// How a translatable element displays its string.
///
/// The distinction is a property of the element, not of the key: the
/// same key may feed a heading on one page and an input hint on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// The translated value replaces the element's visible text content.
    DisplayText,
    /// The translated value replaces the element's placeholder hint text
    /// (text inputs, textareas).
    Placeholder,
}

/// Normalize a locale code (lowercase and replace `_` with `-`).
///
/// All locale comparisons in the crate go through this, so `"en-US"`,
/// `"en_us"` and `"en-us"` name the same locale.
#[must_use]
pub fn normalize_locale_code(code: &str) -> String {
    code.trim().to_lowercase().replace('_', "-")
}

/// Checks whether a normalized code has the shape of a language tag.
///
/// Accepts a 2-8 letter primary subtag optionally followed by 1-8
/// character alphanumeric subtags separated by `-` (e.g. `es`, `en-us`,
/// `az-cyrl-az`). Which codes are actually *supported* is decided by
/// configuration, not by this check.
#[must_use]
pub fn is_locale_code(code: &str) -> bool {
    let mut subtags = code.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|p| (2..=8).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_lowercase()));
    primary_ok
        && subtags.all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()))
}
