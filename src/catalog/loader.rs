// SPDX-License-Identifier: MPL-2.0
//! Catalog loading with remote-then-bundled fallback.
//!
//! Each catalog is fetched from the remote base URL first; on any error or
//! non-success status the bundled copy is served instead, and when that is
//! also unusable the catalog degrades to an empty list. Loaded catalogs are
//! cached for the lifetime of the session; there is no invalidation path.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use rust_embed::RustEmbed;
use serde_json::Value;

use super::model::{parse_entries, CatalogEntry, CatalogKind};
use crate::diagnostics::{DiagnosticEventKind, Diagnostics};
use crate::error::{Error, Result};

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct LocalData;

/// Both catalogs, loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub featured: Arc<Vec<CatalogEntry>>,
    pub apps: Arc<Vec<CatalogEntry>>,
}

/// Session-scoped catalog loader.
pub struct CatalogLoader {
    client: reqwest::Client,
    remote_base: Option<String>,
    cache: Mutex<HashMap<CatalogKind, Arc<Vec<CatalogEntry>>>>,
    diagnostics: Diagnostics,
}

impl CatalogLoader {
    /// Creates a loader.
    ///
    /// `remote_base` of `None` disables remote fetching entirely (offline
    /// mode); that is a caller choice, not a failure, so no fallback event
    /// is recorded for it.
    #[must_use]
    pub fn new(
        client: reqwest::Client,
        remote_base: Option<String>,
        diagnostics: Diagnostics,
    ) -> Self {
        Self {
            client,
            remote_base,
            cache: Mutex::new(HashMap::new()),
            diagnostics,
        }
    }

    /// Loads one catalog, serving the session cache when warm.
    pub async fn load(&self, kind: CatalogKind) -> Arc<Vec<CatalogEntry>> {
        if let Some(cached) = self.cached(kind) {
            return cached;
        }

        let remote = match &self.remote_base {
            Some(base) => match self.fetch_remote(base, kind).await {
                Ok(entries) => Some(entries),
                Err(err) => {
                    self.diagnostics.record(DiagnosticEventKind::CatalogFallback {
                        kind: kind.as_str().to_string(),
                        detail: err.to_string(),
                    });
                    None
                }
            },
            None => None,
        };

        let entries = match remote {
            Some(entries) => entries,
            None => match load_bundled(kind) {
                Some(entries) => entries,
                None => {
                    self.diagnostics.record(DiagnosticEventKind::CatalogEmpty {
                        kind: kind.as_str().to_string(),
                    });
                    Vec::new()
                }
            },
        };

        let entries = Arc::new(entries);
        if let Ok(mut cache) = self.cache.lock() {
            cache.insert(kind, entries.clone());
        }
        entries
    }

    /// Loads both catalogs concurrently.
    pub async fn load_all(&self) -> Catalog {
        let (featured, apps) = tokio::join!(
            self.load(CatalogKind::Featured),
            self.load(CatalogKind::Apps)
        );
        Catalog { featured, apps }
    }

    fn cached(&self, kind: CatalogKind) -> Option<Arc<Vec<CatalogEntry>>> {
        self.cache
            .lock()
            .ok()
            .and_then(|cache| cache.get(&kind).cloned())
    }

    async fn fetch_remote(&self, base: &str, kind: CatalogKind) -> Result<Vec<CatalogEntry>> {
        let url = format!("{}/{}", base.trim_end_matches('/'), kind.file_name());
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Error::Http(format!("HTTP status: {}", response.status())));
        }

        let body: Value = response.json().await?;
        parse_entries(body)
    }
}

/// Reads the bundled copy of a catalog.
///
/// A missing or corrupt bundle yields `None`; the caller decides how loudly
/// to degrade.
fn load_bundled(kind: CatalogKind) -> Option<Vec<CatalogEntry>> {
    let content = LocalData::get(&kind.file_name())?;
    let body: Value = serde_json::from_slice(content.data.as_ref()).ok()?;
    parse_entries(body).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_loader(diagnostics: Diagnostics) -> CatalogLoader {
        CatalogLoader::new(reqwest::Client::new(), None, diagnostics)
    }

    #[test]
    fn bundled_catalogs_parse() {
        for kind in CatalogKind::ALL {
            let entries = load_bundled(kind).expect("bundled catalog should parse");
            assert!(!entries.is_empty(), "bundled {kind} catalog is empty");
        }
    }

    #[tokio::test]
    async fn offline_loader_serves_bundled_copy_without_fallback_event() {
        let diagnostics = Diagnostics::default();
        let loader = offline_loader(diagnostics.clone());

        let apps = loader.load(CatalogKind::Apps).await;
        assert!(!apps.is_empty());
        assert!(diagnostics.is_empty());
    }

    #[tokio::test]
    async fn unreachable_remote_falls_back_to_bundled_copy() {
        let diagnostics = Diagnostics::default();
        let loader = CatalogLoader::new(
            reqwest::Client::new(),
            // Port 1 is practically never listening; connection is refused fast.
            Some("http://127.0.0.1:1/data".to_string()),
            diagnostics.clone(),
        );

        let featured = loader.load(CatalogKind::Featured).await;
        assert!(!featured.is_empty());

        let events = diagnostics.snapshot();
        assert!(events.iter().any(|event| matches!(
            &event.kind,
            DiagnosticEventKind::CatalogFallback { kind, .. } if kind == "featured"
        )));
    }

    #[tokio::test]
    async fn second_load_is_served_from_cache() {
        let diagnostics = Diagnostics::default();
        let loader = CatalogLoader::new(
            reqwest::Client::new(),
            Some("http://127.0.0.1:1/data".to_string()),
            diagnostics.clone(),
        );

        let first = loader.load(CatalogKind::Apps).await;
        let second = loader.load(CatalogKind::Apps).await;

        assert!(Arc::ptr_eq(&first, &second));
        // Only the first load should have hit (and failed) the remote.
        let fallbacks = diagnostics
            .snapshot()
            .iter()
            .filter(|event| matches!(event.kind, DiagnosticEventKind::CatalogFallback { .. }))
            .count();
        assert_eq!(fallbacks, 1);
    }

    #[tokio::test]
    async fn load_all_joins_both_catalogs() {
        let loader = offline_loader(Diagnostics::default());
        let catalog = loader.load_all().await;

        assert!(!catalog.featured.is_empty());
        assert!(!catalog.apps.is_empty());
    }
}
