// SPDX-License-Identifier: MPL-2.0
//! The supported locale set, the normalizer, and full locale tags.
//!
//! Two kinds of identifier live here. [`Locale`] is the closed set every
//! dictionary lookup runs against. [`LocaleTag`] is the full tag a detection
//! source reported (e.g. `pt-BR`), kept around because catalog fields and
//! asset filenames cascade over the full tag before the language prefix.

use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

/// A normalized language identifier from the supported set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    Pt,
    En,
}

impl Locale {
    /// Every supported locale, in dictionary-load order.
    pub const ALL: [Locale; 2] = [Locale::Pt, Locale::En];

    /// Default when normalization receives empty or absent input.
    pub const PRIMARY_DEFAULT: Locale = Locale::Pt;

    /// Default when normalization receives an unrecognized non-empty tag.
    pub const UNRECOGNIZED_DEFAULT: Locale = Locale::En;

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
        }
    }

    /// The single designated fallback locale consulted when a dictionary
    /// key is missing from the active locale.
    #[must_use]
    pub fn fallback(&self) -> Locale {
        match self {
            Locale::Pt => Locale::En,
            Locale::En => Locale::Pt,
        }
    }

    /// Canonical full tag for this locale.
    #[must_use]
    pub fn tag(&self) -> LocaleTag {
        LocaleTag::new(self.as_str())
    }

    /// Maps an arbitrary raw locale string onto the supported set.
    ///
    /// Strips any encoding suffix (text after a `.`) and region/variant
    /// suffix (text after a `_`), lowercases the remainder, and matches it
    /// against a static alias table.
    ///
    /// The two defaults intentionally differ: absent or empty input maps to
    /// [`Locale::PRIMARY_DEFAULT`], while an unrecognized non-empty tag maps
    /// to [`Locale::UNRECOGNIZED_DEFAULT`]. The asymmetry is inherited
    /// behavior and callers rely on it being stable.
    #[must_use]
    pub fn normalize(raw: Option<&str>) -> Locale {
        let raw = match raw {
            Some(value) if !value.trim().is_empty() => value,
            _ => return Locale::PRIMARY_DEFAULT,
        };

        let stripped = raw
            .split('.')
            .next()
            .and_then(|s| s.split('_').next())
            .unwrap_or("");

        match stripped.trim().to_ascii_lowercase().as_str() {
            "pt" | "pt-br" | "portuguese" => Locale::Pt,
            "en" | "en-us" | "english" => Locale::En,
            _ => Locale::UNRECOGNIZED_DEFAULT,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full locale tag as reported by a detection source, lightly cleaned.
///
/// Construction strips any encoding suffix and rewrites `_` separators to
/// `-`, so `en_US.UTF-8` becomes `en-US`. The original casing is preserved:
/// asset filename variants are derived verbatim from this tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Cleans a raw string into a tag without validating it.
    ///
    /// Empty input yields the primary default locale's tag.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let cleaned = clean(raw);
        if cleaned.is_empty() {
            return Locale::PRIMARY_DEFAULT.tag();
        }
        Self(cleaned)
    }

    /// Cleans and validates a raw string, rejecting anything that is not a
    /// plausible language tag.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = clean(raw);
        if cleaned.is_empty() {
            return None;
        }
        LanguageIdentifier::from_str(&cleaned).ok()?;
        Some(Self(cleaned))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language-only prefix of the tag: the portion before the first `-`.
    #[must_use]
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// The tag written the way locale-variant JSON keys spell it, with `_`
    /// as the separator (`pt-BR` → `pt_BR`).
    #[must_use]
    pub fn field_suffix(&self) -> String {
        self.0.replace('-', "_")
    }

    /// Normalized supported locale for this tag.
    #[must_use]
    pub fn locale(&self) -> Locale {
        Locale::normalize(Some(&self.0))
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn clean(raw: &str) -> String {
    raw.split('.').next().unwrap_or("").trim().replace('_', "-")
}
