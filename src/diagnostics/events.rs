// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for fallback tracking.
//!
//! This module defines the events captured whenever a lookup cascade moves
//! past an unavailable or malformed source. The kinds mirror the error
//! taxonomy of the pipeline: *source-unavailable* and *malformed-response*
//! are both non-fatal and always resolve to the next fallback.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// Where a raw locale string was (or failed to be) obtained from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionSource {
    /// Host-integration hook supplied by the embedder.
    Host,
    /// Same-origin `{"lang": ...}` HTTP endpoint.
    Endpoint,
    /// Language preference reported by the operating system.
    System,
    /// Hard-coded terminal default.
    Default,
}

/// A diagnostic event with timestamp.
///
/// The timestamp uses the monotonic clock so event ordering and durations
/// stay meaningful regardless of wall-clock adjustments.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event with the current timestamp.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A detection source was tried and skipped.
    DetectionSourceFailed {
        /// The source that failed to produce a usable tag.
        source: DetectionSource,
        /// Brief description of the failure.
        detail: String,
    },

    /// A detection source produced the raw locale tag for the session.
    LocaleDetected {
        /// The source that won.
        source: DetectionSource,
        /// The raw, unnormalized tag it reported.
        raw_tag: String,
    },

    /// A per-locale dictionary could not be loaded and was replaced with an
    /// empty mapping.
    DictionaryEmpty {
        /// Locale code of the affected dictionary.
        locale: String,
        /// Brief description of the failure.
        detail: String,
    },

    /// A dictionary lookup fell through both locales and returned the key.
    TranslationMissing {
        /// The key that had no translation.
        key: String,
        /// Active locale at lookup time.
        locale: String,
    },

    /// A catalog fetch fell back from the remote source to the bundled copy.
    CatalogFallback {
        /// Catalog kind (`featured` or `apps`).
        kind: String,
        /// Brief description of the remote failure.
        detail: String,
    },

    /// Both catalog sources failed; an empty list was served.
    CatalogEmpty {
        /// Catalog kind (`featured` or `apps`).
        kind: String,
    },
}
