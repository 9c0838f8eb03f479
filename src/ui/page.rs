// SPDX-License-Identifier: MPL-2.0
//! Page elements with localization bindings and the text-update pass.

use crate::i18n::dictionary::Dictionaries;
use crate::i18n::locale::Locale;

/// One rendered element with optional localization bindings.
///
/// Each binding holds the dictionary key whose resolved value is written
/// into the corresponding display slot. Elements without bindings are left
/// untouched by the update pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub text_key: Option<String>,
    pub placeholder_key: Option<String>,
    pub tooltip_key: Option<String>,
    pub text: String,
    pub placeholder: Option<String>,
    pub tooltip: Option<String>,
}

impl Element {
    /// Element whose text content is bound to a dictionary key.
    #[must_use]
    pub fn text(key: impl Into<String>) -> Self {
        Self {
            text_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Element with static text (not rewritten by the update pass).
    #[must_use]
    pub fn static_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Binds the placeholder slot to a dictionary key.
    #[must_use]
    pub fn with_placeholder(mut self, key: impl Into<String>) -> Self {
        self.placeholder_key = Some(key.into());
        self
    }

    /// Binds the tooltip slot to a dictionary key.
    #[must_use]
    pub fn with_tooltip(mut self, key: impl Into<String>) -> Self {
        self.tooltip_key = Some(key.into());
        self
    }
}

/// The page as a flat collection of elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Rewrites every bound slot from the dictionaries.
    ///
    /// This is a full re-scan, not an incremental diff: every element is
    /// visited on every call. Running it twice under the same active locale
    /// leaves the page unchanged.
    pub fn apply_translations(&mut self, dictionaries: &Dictionaries, active: Locale) {
        for element in &mut self.elements {
            if let Some(key) = &element.text_key {
                element.text = dictionaries.get_text(active, key);
            }
            if let Some(key) = &element.placeholder_key {
                element.placeholder = Some(dictionaries.get_text(active, key));
            }
            if let Some(key) = &element.tooltip_key {
                element.tooltip = Some(dictionaries.get_text(active, key));
            }
        }
    }
}
