// SPDX-License-Identifier: MPL-2.0
//! Catalog record types and localized accessors.

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::i18n::fields::{asset_candidates, resolve_asset, resolve_text};
use crate::i18n::locale::LocaleTag;

/// The two catalogs the application knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Featured,
    Apps,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Featured, CatalogKind::Apps];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CatalogKind::Featured => "featured",
            CatalogKind::Apps => "apps",
        }
    }

    /// Filename of this catalog, shared by the remote and bundled copies.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

impl fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog record.
///
/// Wraps the raw JSON object so localized accessors can cascade over the
/// locale-variant keys while leaving the record itself untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    record: Map<String, Value>,
}

impl CatalogEntry {
    #[must_use]
    pub fn new(record: Map<String, Value>) -> Self {
        Self { record }
    }

    /// Stable identifier; falls back to the package name.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.record
            .get("id")
            .or_else(|| self.record.get("package"))
            .and_then(Value::as_str)
    }

    /// Display name, localized. The untagged `name` is always a valid
    /// fallback when present; a record with neither yields the id.
    #[must_use]
    pub fn name(&self, tag: &LocaleTag) -> String {
        resolve_text(&self.record, "name", tag, self.id())
            .unwrap_or_default()
            .to_string()
    }

    /// Localized one-line summary, if any.
    #[must_use]
    pub fn summary(&self, tag: &LocaleTag) -> Option<&str> {
        resolve_text(&self.record, "summary", tag, None)
    }

    /// Most specific banner filename variant for the locale.
    #[must_use]
    pub fn banner(&self, tag: &LocaleTag) -> Option<String> {
        resolve_asset(&self.record, "banner", tag)
    }

    /// Every banner candidate, most specific first, for callers that
    /// substitute on load failure.
    #[must_use]
    pub fn banner_candidates(&self, tag: &LocaleTag) -> Vec<String> {
        match resolve_text(&self.record, "banner", tag, None) {
            Some(base) if !base.is_empty() => asset_candidates(base, tag),
            _ => Vec::new(),
        }
    }

    /// Generic localized field access for anything schema-specific.
    #[must_use]
    pub fn field<'a>(&'a self, name: &str, tag: &LocaleTag) -> Option<&'a str> {
        resolve_text(&self.record, name, tag, None)
    }

    /// The underlying record.
    #[must_use]
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

/// Parses a catalog body into entries.
///
/// The top level must be an array; anything else counts as a malformed
/// response. Array elements that are not objects are skipped rather than
/// failing the whole catalog.
pub fn parse_entries(value: Value) -> Result<Vec<CatalogEntry>> {
    match value {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(record) => Some(CatalogEntry::new(record)),
                _ => None,
            })
            .collect()),
        other => Err(Error::Parse(format!(
            "expected a JSON array of records, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
