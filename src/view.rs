//! View seam between the engine and an externally-owned UI tree.
//!
//! The binder and controller never touch a concrete UI directly; they
//! see a [`View`]: a visitor over tagged elements plus the affordance
//! indicators. [`PageView`] is the in-memory implementation used by the
//! demo binary and the tests; a real frontend would adapt its own tree
//! behind the same trait.

use crate::types::{
    ElementKind,
    normalize_locale_code,
};

/// A single tagged element, as the binder sees it.
///
/// The engine only ever reads the tag and writes display content; it
/// never creates or destroys elements.
pub trait Translatable {
    /// The element's translation key. May be empty if the tag was left
    /// blank in the markup.
    fn translation_key(&self) -> &str;

    /// Whether the element shows text content or a placeholder hint.
    fn kind(&self) -> ElementKind;

    /// Overwrites the element's visible text content.
    fn set_text(&mut self, value: &str);

    /// Overwrites the element's placeholder hint text.
    fn set_placeholder(&mut self, value: &str);
}

/// Capability interface over the UI tree.
pub trait View {
    /// Visits every element tagged with a translation key, in document
    /// order. Untagged elements are not visited.
    fn for_each_translatable(&mut self, visit: &mut dyn FnMut(&mut dyn Translatable));

    /// Marks every affordance indicator of `locale` active and clears
    /// all others (a locale may have several indicators, e.g. a desktop
    /// and a mobile button).
    fn set_active_indicator(&mut self, locale: &str);
}

/// One element of the in-memory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    id: String,
    key: Option<String>,
    kind: ElementKind,
    text: String,
    placeholder: String,
}

impl PageElement {
    /// Creates an element. `key: None` means the element is not tagged
    /// and the binder never sees it; `Some("")` is a tagged-but-blank
    /// element.
    #[must_use]
    pub fn new(id: &str, kind: ElementKind, key: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            key: key.map(ToString::to_string),
            kind,
            text: String::new(),
            placeholder: String::new(),
        }
    }

    /// Sets the initial visible text (the markup's hardcoded content).
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }
}

impl Translatable for PageElement {
    fn translation_key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    fn kind(&self) -> ElementKind {
        self.kind
    }

    fn set_text(&mut self, value: &str) {
        self.text = value.to_string();
    }

    fn set_placeholder(&mut self, value: &str) {
        self.placeholder = value.to_string();
    }
}

/// An affordance indicator (e.g. a language button).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorButton {
    id: String,
    locale: String,
    active: bool,
}

impl IndicatorButton {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}

/// In-memory page: a flat element list plus indicator buttons.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    elements: Vec<PageElement>,
    indicators: Vec<IndicatorButton>,
}

impl PageView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element to the page.
    pub fn push_element(&mut self, element: PageElement) {
        self.elements.push(element);
    }

    /// Appends an indicator button for a locale.
    pub fn push_indicator(&mut self, id: &str, locale: &str) {
        self.indicators.push(IndicatorButton {
            id: id.to_string(),
            locale: normalize_locale_code(locale),
            active: false,
        });
    }

    /// Finds an element by id.
    #[must_use]
    pub fn element(&self, id: &str) -> Option<&PageElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    #[must_use]
    pub fn elements(&self) -> &[PageElement] {
        &self.elements
    }

    #[must_use]
    pub fn indicators(&self) -> &[IndicatorButton] {
        &self.indicators
    }

    /// Ids of the currently active indicators.
    #[must_use]
    pub fn active_indicator_ids(&self) -> Vec<&str> {
        self.indicators.iter().filter(|i| i.active).map(|i| i.id.as_str()).collect()
    }
}

impl View for PageView {
    fn for_each_translatable(&mut self, visit: &mut dyn FnMut(&mut dyn Translatable)) {
        for element in &mut self.elements {
            if element.key.is_some() {
                visit(element);
            }
        }
    }

    fn set_active_indicator(&mut self, locale: &str) {
        let locale = normalize_locale_code(locale);
        for indicator in &mut self.indicators {
            indicator.active = indicator.locale == locale;
        }
    }
}
