// SPDX-License-Identifier: MPL-2.0
//! Translation dictionaries and key lookup.
//!
//! One flat key→string JSON dictionary is bundled per supported locale and
//! loaded once at initialization; there is no reload path. A dictionary
//! that is missing or fails to parse is replaced with an empty mapping and
//! recorded as a diagnostic event, so a broken translation file can never
//! abort startup. Lookup likewise never fails: the worst case is the key
//! echoed back, which shows up on screen as an untranslated marker.

use std::collections::HashMap;

use rust_embed::RustEmbed;

use crate::diagnostics::{DiagnosticEventKind, Diagnostics};
use crate::i18n::locale::Locale;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// The loaded per-locale dictionaries for a session.
#[derive(Debug, Clone)]
pub struct Dictionaries {
    maps: HashMap<Locale, HashMap<String, String>>,
    diagnostics: Diagnostics,
}

impl Dictionaries {
    /// Loads every supported locale's dictionary from the bundled assets.
    ///
    /// Each locale is loaded independently; a failure affects only that
    /// locale's mapping.
    #[must_use]
    pub fn load(diagnostics: Diagnostics) -> Self {
        let mut maps = HashMap::new();

        for locale in Locale::ALL {
            let filename = format!("{}.json", locale.as_str());
            let map = match Asset::get(&filename) {
                Some(content) => match parse_dictionary(content.data.as_ref()) {
                    Ok(map) => map,
                    Err(detail) => {
                        diagnostics.record(DiagnosticEventKind::DictionaryEmpty {
                            locale: locale.as_str().to_string(),
                            detail,
                        });
                        HashMap::new()
                    }
                },
                None => {
                    diagnostics.record(DiagnosticEventKind::DictionaryEmpty {
                        locale: locale.as_str().to_string(),
                        detail: format!("bundled asset {filename} missing"),
                    });
                    HashMap::new()
                }
            };
            maps.insert(locale, map);
        }

        Self { maps, diagnostics }
    }

    /// Builds dictionaries from in-memory mappings.
    ///
    /// Locales absent from `maps` behave exactly like a failed load: an
    /// empty mapping that every lookup falls through.
    #[must_use]
    pub fn from_parts(
        maps: HashMap<Locale, HashMap<String, String>>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self { maps, diagnostics }
    }

    /// Looks up a display string for `key` under the active locale.
    ///
    /// Order: active locale's dictionary, the designated fallback locale's
    /// dictionary, then the key itself. A full fallthrough is recorded as a
    /// diagnostic event.
    #[must_use]
    pub fn get_text(&self, active: Locale, key: &str) -> String {
        if let Some(value) = self.maps.get(&active).and_then(|map| map.get(key)) {
            return value.clone();
        }
        if let Some(value) = self
            .maps
            .get(&active.fallback())
            .and_then(|map| map.get(key))
        {
            return value.clone();
        }

        self.diagnostics
            .record(DiagnosticEventKind::TranslationMissing {
                key: key.to_string(),
                locale: active.as_str().to_string(),
            });
        key.to_string()
    }

    /// Number of entries loaded for a locale.
    #[must_use]
    pub fn len(&self, locale: Locale) -> usize {
        self.maps.get(&locale).map(HashMap::len).unwrap_or(0)
    }

    /// Returns true if the locale's dictionary has no entries.
    #[must_use]
    pub fn is_empty(&self, locale: Locale) -> bool {
        self.len(locale) == 0
    }
}

fn parse_dictionary(bytes: &[u8]) -> Result<HashMap<String, String>, String> {
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}
