// SPDX-License-Identifier: MPL-2.0
//! Locale fallback cascades over catalog records and asset filenames.
//!
//! Catalog records are schema-agnostic JSON objects that may carry
//! locale-tagged variants next to a base field: `summary_pt_BR` and
//! `summary_en` alongside `summary`. The resolvers here walk those variants
//! from most to least specific and never mutate the record.

use serde_json::{Map, Value};

use crate::i18n::locale::LocaleTag;

/// Filename extensions for which locale-suffixed variants are derived.
const ASSET_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "svg", "webp", "gif"];

/// Resolves a record field through the locale cascade.
///
/// Lookup order, first hit wins: `field_<fullLocale>` (tag separators
/// written as `_` in keys), `field_<languageOnly>`, the untagged `field`,
/// then `default`. Returning the default, which may itself be `None`, is
/// the designed terminal fallback and not an error condition.
pub fn resolve_field<'a>(
    record: &'a Map<String, Value>,
    field: &str,
    tag: &LocaleTag,
    default: Option<&'a Value>,
) -> Option<&'a Value> {
    let full_key = format!("{field}_{}", tag.field_suffix());
    if let Some(value) = record.get(&full_key) {
        return Some(value);
    }

    let language_key = format!("{field}_{}", tag.language());
    if let Some(value) = record.get(&language_key) {
        return Some(value);
    }

    record.get(field).or(default)
}

/// String-typed variant of [`resolve_field`].
///
/// A resolved value that is not a JSON string counts as a miss and falls
/// through to the default.
pub fn resolve_text<'a>(
    record: &'a Map<String, Value>,
    field: &str,
    tag: &LocaleTag,
    default: Option<&'a str>,
) -> Option<&'a str> {
    resolve_field(record, field, tag, None)
        .and_then(Value::as_str)
        .or(default)
}

/// Derives the ordered locale-variant candidates for a base filename.
///
/// For a recognized extension, the locale suffix is inserted before the
/// extension: `banner.png` under `pt-BR` yields `banner-pt-BR.png`,
/// `banner-pt.png`, `banner.png`. When the full tag has no region the two
/// variants collapse into one. Unrecognized extensions get no variants.
#[must_use]
pub fn asset_candidates(base: &str, tag: &LocaleTag) -> Vec<String> {
    let Some((stem, ext)) = base.rsplit_once('.') else {
        return vec![base.to_string()];
    };
    if stem.is_empty() || !ASSET_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()) {
        return vec![base.to_string()];
    }

    let mut candidates = vec![format!("{stem}-{}.{ext}", tag.as_str())];
    let language_variant = format!("{stem}-{}.{ext}", tag.language());
    if language_variant != candidates[0] {
        candidates.push(language_variant);
    }
    candidates.push(base.to_string());
    candidates
}

/// Resolves an asset field to the most specific candidate filename.
///
/// The base filename itself goes through the field cascade first, then the
/// first locale-variant candidate is selected. Selection is purely
/// syntactic; nothing checks that the file exists. Callers are expected to
/// substitute at load time when the variant turns out to be missing.
#[must_use]
pub fn resolve_asset(record: &Map<String, Value>, field: &str, tag: &LocaleTag) -> Option<String> {
    let base = resolve_text(record, field, tag, None)?;
    if base.is_empty() {
        return None;
    }
    asset_candidates(base, tag).into_iter().next()
}
