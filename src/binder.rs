//! Binder: synchronizes visible UI text with the active locale's table.

use crate::diagnostics::Diagnostic;
use crate::dictionary::Dictionary;
use crate::types::{
    ElementKind,
    normalize_locale_code,
};
use crate::view::View;

/// Rewrites every tagged element of `view` from `locale`'s table.
///
/// On a hit the translated value overwrites the element's text content
/// or its placeholder hint, depending on the element kind. A key
/// missing from the table, or a blank tag, leaves the element unchanged
/// and records a diagnostic; the pass always continues to the remaining
/// elements. Applying the same locale twice produces the same visible
/// state.
pub fn apply(dictionary: &Dictionary, locale: &str, view: &mut dyn View) -> Vec<Diagnostic> {
    let locale = normalize_locale_code(locale);
    let mut diagnostics = Vec::new();

    view.for_each_translatable(&mut |element| {
        let key = element.translation_key();
        if key.trim().is_empty() {
            tracing::warn!("Translatable element has an empty translation key");
            diagnostics.push(Diagnostic::missing_tag_value());
            return;
        }

        match dictionary.lookup(&locale, key) {
            Some(value) => match element.kind() {
                ElementKind::DisplayText => element.set_text(value),
                ElementKind::Placeholder => element.set_placeholder(value),
            },
            None => {
                tracing::warn!(%locale, %key, "Translation key not found");
                diagnostics.push(Diagnostic::missing_translation(&locale, key));
            }
        }
    });

    tracing::debug!(%locale, misses = diagnostics.len(), "Applied locale to view");
    diagnostics
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::diagnostics::DiagnosticKind;
    use crate::test_utils::{
        sample_dictionary,
        sample_page,
    };
    use crate::view::PageElement;

    #[googletest::test]
    fn apply_overwrites_display_text() {
        let dictionary = sample_dictionary();
        let mut page = sample_page();

        let diagnostics = apply(&dictionary, "es", &mut page);

        expect_that!(diagnostics, is_empty());
        expect_that!(page.element("nav-home-link").unwrap().text(), eq("Inicio"));
        expect_that!(page.element("about-heading").unwrap().text(), eq("Sobre Nosotros"));
    }

    #[googletest::test]
    fn apply_writes_placeholder_for_input_elements() {
        let dictionary = sample_dictionary();
        let mut page = sample_page();

        let _diagnostics = apply(&dictionary, "en-us", &mut page);

        let input = page.element("name-input").unwrap();
        expect_that!(input.placeholder(), eq("Your name"));
        // placeholder translation must not leak into the text content
        expect_that!(input.text(), eq(""));
    }

    #[googletest::test]
    fn missing_key_leaves_element_and_continues() {
        let dictionary = sample_dictionary();
        let mut page = sample_page();
        // page starts in Spanish
        let _diagnostics = apply(&dictionary, "es", &mut page);

        // en-us has no quote-title
        let diagnostics = apply(&dictionary, "en-us", &mut page);

        assert_that!(diagnostics, len(eq(1)));
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::MissingTranslation {
                locale: "en-us".to_string(),
                key: "quote-title".to_string(),
            }
        );
        // prior text degrades gracefully
        expect_that!(page.element("quote-heading").unwrap().text(), eq("¿Necesitas una cotización?"));
        // elements after the miss were still translated
        expect_that!(page.element("about-heading").unwrap().text(), eq("About Us"));
        expect_that!(page.element("name-input").unwrap().placeholder(), eq("Your name"));
    }

    #[googletest::test]
    fn blank_tag_records_missing_tag_value() {
        let dictionary = sample_dictionary();
        let mut page = sample_page();
        page.push_element(
            PageElement::new("broken", ElementKind::DisplayText, Some(""))
                .with_text("original"),
        );

        let diagnostics = apply(&dictionary, "es", &mut page);

        assert_that!(diagnostics, len(eq(1)));
        assert_eq!(diagnostics[0].kind, DiagnosticKind::MissingTagValue);
        expect_that!(page.element("broken").unwrap().text(), eq("original"));
    }

    #[googletest::test]
    fn apply_is_idempotent() {
        let dictionary = sample_dictionary();
        let mut page = sample_page();

        let _diagnostics = apply(&dictionary, "en-us", &mut page);
        let once = page.clone();
        let _diagnostics = apply(&dictionary, "en-us", &mut page);

        assert_eq!(page.elements(), once.elements());
    }

    #[googletest::test]
    fn apply_normalizes_locale_argument() {
        let dictionary = sample_dictionary();
        let mut page = sample_page();

        let _diagnostics = apply(&dictionary, "en-US", &mut page);

        expect_that!(page.element("nav-home-link").unwrap().text(), eq("Home"));
    }
}
