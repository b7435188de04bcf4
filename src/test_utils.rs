//! テスト用ユーティリティ関数
//!
//! 複数のテストモジュールで使用される共通のヘルパー関数を提供します。
#![cfg(test)]

use crate::dictionary::{
    Dictionary,
    LocaleTable,
};
use crate::types::ElementKind;
use crate::view::{
    PageElement,
    PageView,
};

/// テスト用の `LocaleTable` を作成する
pub(crate) fn create_table(entries: &[(&str, &str)]) -> LocaleTable {
    let mut table = LocaleTable::new();
    for (key, value) in entries {
        table.insert(*key, *value);
    }
    table
}

/// テスト用の `Dictionary` を作成する
///
/// # Arguments
/// * `locales` - (ロケールコード, エントリ一覧) のリスト
pub(crate) fn create_dictionary(locales: &[(&str, &[(&str, &str)])]) -> Dictionary {
    let mut dictionary = Dictionary::new();
    for (locale, entries) in locales {
        dictionary.add_table(locale, create_table(entries));
    }
    dictionary
}

/// サイトの縮小版辞書（`quote-title` は es のみ）
pub(crate) fn sample_dictionary() -> Dictionary {
    create_dictionary(&[
        (
            "es",
            &[
                ("nav-inicio", "Inicio"),
                ("about-title", "Sobre Nosotros"),
                ("form-name-placeholder", "Tu nombre"),
                ("quote-title", "¿Necesitas una cotización?"),
            ],
        ),
        (
            "en-us",
            &[
                ("nav-inicio", "Home"),
                ("about-title", "About Us"),
                ("form-name-placeholder", "Your name"),
            ],
        ),
    ])
}

/// サイトの縮小版ページ（デスクトップ + モバイルのボタン対を含む）
pub(crate) fn sample_page() -> PageView {
    let mut page = PageView::new();
    page.push_element(
        PageElement::new("nav-home-link", ElementKind::DisplayText, Some("nav-inicio"))
            .with_text("Inicio"),
    );
    page.push_element(
        PageElement::new("about-heading", ElementKind::DisplayText, Some("about-title"))
            .with_text("Sobre Nosotros"),
    );
    page.push_element(PageElement::new(
        "name-input",
        ElementKind::Placeholder,
        Some("form-name-placeholder"),
    ));
    page.push_element(
        PageElement::new("quote-heading", ElementKind::DisplayText, Some("quote-title"))
            .with_text("¿Necesitas una cotización?"),
    );
    page.push_indicator("language-toggle-colombia", "es");
    page.push_indicator("mobile-language-toggle-colombia", "es");
    page.push_indicator("language-toggle-us", "en-us");
    page.push_indicator("mobile-language-toggle-us", "en-us");
    page
}
