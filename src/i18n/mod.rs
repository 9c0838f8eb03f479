// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module implements the locale resolution and localized-content lookup
//! engine: language detection, normalization onto the supported locale set,
//! cascading lookups over locale-tagged catalog fields and asset filenames,
//! and flat key→string translation dictionaries.
//!
//! # Features
//!
//! - Locale detection from a host hook, an HTTP endpoint, or system settings
//! - Normalization of arbitrary raw tags onto the supported set
//! - Per-field and per-asset locale fallback cascades
//! - Dictionary lookup that degrades to the key itself, never to an error
//!
//! Every fallback hop is recorded through [`crate::diagnostics`], so a
//! swallowed failure is observable even though it is never fatal.

pub mod detect;
pub mod dictionary;
pub mod fields;
pub mod locale;

pub use detect::{detect_locale, HostLocaleSource, SystemLanguage, SystemLanguageSource};
pub use dictionary::Dictionaries;
pub use fields::{asset_candidates, resolve_asset, resolve_field, resolve_text};
pub use locale::{Locale, LocaleTag};
