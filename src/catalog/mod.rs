// SPDX-License-Identifier: MPL-2.0
//! Catalog data: featured items and the full application list.
//!
//! Records are schema-agnostic JSON objects beyond the locale-variant
//! naming convention handled by [`crate::i18n::fields`]. Loading follows a
//! remote-then-bundled fallback and caches results for the session; see
//! [`loader`].

mod loader;
mod model;

pub use loader::{Catalog, CatalogLoader};
pub use model::{parse_entries, CatalogEntry, CatalogKind};
