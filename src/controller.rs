//! Locale switch controller.
//!
//! Owns the active locale. Each controller instance carries its own
//! state, so independent instances (one per page, or one per test) do
//! not interfere.

use thiserror::Error;

use crate::binder;
use crate::config::I18nSettings;
use crate::diagnostics::Diagnostic;
use crate::dictionary::{
    Dictionary,
    DictionaryError,
};
use crate::types::normalize_locale_code;
use crate::view::View;

/// Errors while constructing a controller.
#[derive(Debug, Error)]
pub enum ControllerError {
    /// A declared locale has no translation table.
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The configured default locale is not in the declared set.
    #[error("Default locale '{locale}' is not in the supported set")]
    DefaultNotSupported { locale: String },
}

/// Error returned by [`LocaleController::switch_to`].
#[derive(Debug, Error)]
pub enum SwitchError {
    /// The requested code is outside the declared set. The active
    /// locale is left unchanged.
    #[error("Unsupported locale '{locale}', supported locales: {}", .supported.join(", "))]
    UnsupportedLocale { locale: String, supported: Vec<String> },
}

/// Switches the active locale and keeps a view in sync with it.
#[derive(Debug, Clone)]
pub struct LocaleController {
    dictionary: Dictionary,
    /// Declared locale codes, normalized, in declaration order.
    supported: Vec<String>,
    /// The active locale. Always one of `supported`.
    active: String,
}

impl LocaleController {
    /// Creates a controller in the configured default locale.
    ///
    /// # Errors
    /// - The default locale is not one of the supported locales
    /// - A supported locale has no table in the dictionary
    pub fn new(dictionary: Dictionary, settings: &I18nSettings) -> Result<Self, ControllerError> {
        let supported: Vec<String> =
            settings.supported_locales.iter().map(|l| normalize_locale_code(l)).collect();
        let active = normalize_locale_code(&settings.default_locale);

        if !supported.contains(&active) {
            return Err(ControllerError::DefaultNotSupported { locale: active });
        }
        dictionary.ensure_tables(&supported)?;

        tracing::debug!(default = %active, supported = ?supported, "Locale controller ready");
        Ok(Self { dictionary, supported, active })
    }

    /// The currently active locale.
    #[must_use]
    pub fn current(&self) -> &str {
        &self.active
    }

    /// Declared locale codes, in declaration order.
    #[must_use]
    pub fn supported_locales(&self) -> &[String] {
        &self.supported
    }

    /// Whether a code names a supported locale.
    #[must_use]
    pub fn is_supported(&self, locale: &str) -> bool {
        let locale = normalize_locale_code(locale);
        self.supported.iter().any(|s| *s == locale)
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Renders the active locale into the view (initial page load):
    /// binder pass plus affordance indicator update.
    pub fn apply_current(&self, view: &mut dyn View) -> Vec<Diagnostic> {
        let diagnostics = binder::apply(&self.dictionary, &self.active, view);
        view.set_active_indicator(&self.active);
        diagnostics
    }

    /// Switches the active locale and re-renders the view.
    ///
    /// On success exactly one locale's indicators end up active. Any
    /// per-element misses are returned as diagnostics, never as an
    /// error.
    ///
    /// # Errors
    /// `SwitchError::UnsupportedLocale` for a code outside the declared
    /// set; the active locale and the view are left unchanged.
    pub fn switch_to(
        &mut self,
        locale: &str,
        view: &mut dyn View,
    ) -> Result<Vec<Diagnostic>, SwitchError> {
        let locale = normalize_locale_code(locale);
        if !self.supported.contains(&locale) {
            tracing::warn!(%locale, "Rejected switch to unsupported locale");
            return Err(SwitchError::UnsupportedLocale {
                locale,
                supported: self.supported.clone(),
            });
        }

        self.active = locale;
        tracing::info!(locale = %self.active, "Switched language");
        Ok(self.apply_current(view))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::test_utils::{
        sample_dictionary,
        sample_page,
    };

    fn controller() -> LocaleController {
        LocaleController::new(sample_dictionary(), &I18nSettings::default()).unwrap()
    }

    #[googletest::test]
    fn starts_in_default_locale() {
        let controller = controller();

        expect_that!(controller.current(), eq("es"));
        expect_that!(
            controller.supported_locales(),
            elements_are![eq("es"), eq("en-us")]
        );
    }

    #[googletest::test]
    fn switch_to_updates_state_view_and_indicators() {
        let mut controller = controller();
        let mut page = sample_page();
        let _diagnostics = controller.apply_current(&mut page);

        let result = controller.switch_to("en-us", &mut page);

        expect_that!(result, ok(anything()));
        expect_that!(controller.current(), eq("en-us"));
        expect_that!(page.element("nav-home-link").unwrap().text(), eq("Home"));
        expect_that!(
            page.active_indicator_ids(),
            elements_are![eq(&"language-toggle-us"), eq(&"mobile-language-toggle-us")]
        );
    }

    #[googletest::test]
    fn switch_back_restores_spanish_indicators() {
        let mut controller = controller();
        let mut page = sample_page();
        let _diagnostics = controller.apply_current(&mut page);

        let _result = controller.switch_to("en-us", &mut page);
        let _result = controller.switch_to("es", &mut page);

        expect_that!(controller.current(), eq("es"));
        expect_that!(page.element("nav-home-link").unwrap().text(), eq("Inicio"));
        expect_that!(
            page.active_indicator_ids(),
            elements_are![eq(&"language-toggle-colombia"), eq(&"mobile-language-toggle-colombia")]
        );
    }

    #[googletest::test]
    fn unsupported_locale_is_rejected_without_state_change() {
        let mut controller = controller();
        let mut page = sample_page();
        let _diagnostics = controller.apply_current(&mut page);
        let before = page.clone();

        let result = controller.switch_to("fr", &mut page);

        assert!(
            matches!(&result, Err(SwitchError::UnsupportedLocale { locale, .. }) if locale == "fr")
        );
        expect_that!(controller.current(), eq("es"));
        assert_eq!(page.elements(), before.elements());
        assert_eq!(page.active_indicator_ids(), before.active_indicator_ids());
    }

    #[googletest::test]
    fn stubbed_english_uk_is_unsupported() {
        let mut controller = controller();
        let mut page = sample_page();

        let result = controller.switch_to("en-uk", &mut page);

        expect_that!(result, err(anything()));
        expect_that!(controller.current(), eq("es"));
    }

    #[googletest::test]
    fn switch_to_normalizes_locale_code() {
        let mut controller = controller();
        let mut page = sample_page();

        let result = controller.switch_to("en-US", &mut page);

        expect_that!(result, ok(anything()));
        expect_that!(controller.current(), eq("en-us"));
    }

    #[googletest::test]
    fn switch_reports_misses_as_diagnostics_not_errors() {
        let mut controller = controller();
        let mut page = sample_page();

        // en-us lacks quote-title in the sample dictionary
        let diagnostics = controller.switch_to("en-us", &mut page).unwrap();

        expect_that!(diagnostics, len(eq(1)));
    }

    #[googletest::test]
    fn new_rejects_default_outside_supported_set() {
        let settings = I18nSettings {
            default_locale: "fr".to_string(),
            ..I18nSettings::default()
        };

        let result = LocaleController::new(sample_dictionary(), &settings);

        assert!(
            matches!(result, Err(ControllerError::DefaultNotSupported { locale }) if locale == "fr")
        );
    }

    #[googletest::test]
    fn new_rejects_declared_locale_without_table() {
        let settings = I18nSettings {
            supported_locales: vec!["es".to_string(), "en-us".to_string(), "en-uk".to_string()],
            ..I18nSettings::default()
        };

        let result = LocaleController::new(sample_dictionary(), &settings);

        assert!(matches!(result, Err(ControllerError::Dictionary(_))));
    }

    #[googletest::test]
    fn instances_do_not_share_state() {
        let mut first = controller();
        let second = controller();
        let mut page = sample_page();

        let _result = first.switch_to("en-us", &mut page);

        expect_that!(first.current(), eq("en-us"));
        expect_that!(second.current(), eq("es"));
    }
}
