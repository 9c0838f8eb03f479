// SPDX-License-Identifier: MPL-2.0
//! Raw locale detection from the environment.
//!
//! Sources are tried in strict priority order and only the first usable one
//! wins: a host-integration hook (when the embedder provides one), an HTTP
//! endpoint answering `{"lang": "<tag>"}`, and finally the language the
//! operating system reports. Detection never fails; when every source is
//! unavailable it settles on [`DEFAULT_LOCALE_TAG`]. Each skipped source is
//! recorded as a diagnostic event rather than surfaced as an error.

use serde::Deserialize;

use crate::diagnostics::{DetectionSource, DiagnosticEventKind, Diagnostics};
use crate::i18n::locale::LocaleTag;

/// Terminal default when no detection source produces a usable tag.
pub const DEFAULT_LOCALE_TAG: &str = "en-US";

/// Host-integration hook for embedders that know the user's locale.
///
/// Returning `None` means the host has no opinion and the next source is
/// consulted.
pub trait HostLocaleSource {
    fn locale(&self) -> Option<String>;
}

/// Read-only access to the language the runtime reports for the user.
pub trait SystemLanguage {
    fn language(&self) -> Option<String>;
}

/// System language provider backed by `sys-locale`.
#[derive(Debug, Default, Copy, Clone)]
pub struct SystemLanguageSource;

impl SystemLanguage for SystemLanguageSource {
    fn language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

#[derive(Deserialize)]
struct LangResponse {
    lang: String,
}

/// Determines the raw locale tag for the session.
///
/// Priority order: host hook, endpoint, system language, then
/// [`DEFAULT_LOCALE_TAG`]. Any error, non-success status, or implausible
/// tag from a source is swallowed, recorded, and the next source is tried.
pub async fn detect_locale(
    host: Option<&dyn HostLocaleSource>,
    endpoint: Option<&str>,
    client: &reqwest::Client,
    system: &dyn SystemLanguage,
    diagnostics: &Diagnostics,
) -> LocaleTag {
    if let Some(host) = host {
        match host.locale() {
            Some(raw) => match LocaleTag::parse(&raw) {
                Some(tag) => {
                    diagnostics.record(DiagnosticEventKind::LocaleDetected {
                        source: DetectionSource::Host,
                        raw_tag: raw,
                    });
                    return tag;
                }
                None => diagnostics.record(DiagnosticEventKind::DetectionSourceFailed {
                    source: DetectionSource::Host,
                    detail: format!("implausible tag: {raw:?}"),
                }),
            },
            None => diagnostics.record(DiagnosticEventKind::DetectionSourceFailed {
                source: DetectionSource::Host,
                detail: "host reported no locale".to_string(),
            }),
        }
    }

    if let Some(url) = endpoint {
        match query_endpoint(client, url).await {
            Ok(raw) => match LocaleTag::parse(&raw) {
                Some(tag) => {
                    diagnostics.record(DiagnosticEventKind::LocaleDetected {
                        source: DetectionSource::Endpoint,
                        raw_tag: raw,
                    });
                    return tag;
                }
                None => diagnostics.record(DiagnosticEventKind::DetectionSourceFailed {
                    source: DetectionSource::Endpoint,
                    detail: format!("implausible tag: {raw:?}"),
                }),
            },
            Err(detail) => diagnostics.record(DiagnosticEventKind::DetectionSourceFailed {
                source: DetectionSource::Endpoint,
                detail,
            }),
        }
    }

    match system.language() {
        Some(raw) => {
            if let Some(tag) = LocaleTag::parse(&raw) {
                diagnostics.record(DiagnosticEventKind::LocaleDetected {
                    source: DetectionSource::System,
                    raw_tag: raw,
                });
                return tag;
            }
            diagnostics.record(DiagnosticEventKind::DetectionSourceFailed {
                source: DetectionSource::System,
                detail: format!("implausible tag: {raw:?}"),
            });
        }
        None => diagnostics.record(DiagnosticEventKind::DetectionSourceFailed {
            source: DetectionSource::System,
            detail: "no system language reported".to_string(),
        }),
    }

    diagnostics.record(DiagnosticEventKind::LocaleDetected {
        source: DetectionSource::Default,
        raw_tag: DEFAULT_LOCALE_TAG.to_string(),
    });
    LocaleTag::new(DEFAULT_LOCALE_TAG)
}

/// Queries the `{"lang": ...}` endpoint.
///
/// The request inherits the client's bounded timeout; a hung endpoint can
/// delay startup by at most that much.
async fn query_endpoint(client: &reqwest::Client, url: &str) -> Result<String, String> {
    let response = client.get(url).send().await.map_err(|e| e.to_string())?;

    if !response.status().is_success() {
        return Err(format!("HTTP status: {}", response.status()));
    }

    let body: LangResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::DiagnosticEvent;

    struct StubHost(Option<&'static str>);

    impl HostLocaleSource for StubHost {
        fn locale(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    struct StubSystem(Option<&'static str>);

    impl SystemLanguage for StubSystem {
        fn language(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    fn detected_sources(events: &[DiagnosticEvent]) -> Vec<DetectionSource> {
        events
            .iter()
            .filter_map(|event| match &event.kind {
                DiagnosticEventKind::LocaleDetected { source, .. } => Some(*source),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn host_hook_wins_over_later_sources() {
        let diagnostics = Diagnostics::default();
        let client = reqwest::Client::new();
        let tag = detect_locale(
            Some(&StubHost(Some("pt-BR"))),
            None,
            &client,
            &StubSystem(Some("en-US")),
            &diagnostics,
        )
        .await;

        assert_eq!(tag.as_str(), "pt-BR");
        assert_eq!(
            detected_sources(&diagnostics.snapshot()),
            vec![DetectionSource::Host]
        );
    }

    #[tokio::test]
    async fn empty_host_answer_falls_through_to_system() {
        let diagnostics = Diagnostics::default();
        let client = reqwest::Client::new();
        let tag = detect_locale(
            Some(&StubHost(None)),
            None,
            &client,
            &StubSystem(Some("pt")),
            &diagnostics,
        )
        .await;

        assert_eq!(tag.as_str(), "pt");
        let events = diagnostics.snapshot();
        assert!(events.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::DetectionSourceFailed {
                source: DetectionSource::Host,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_swallowed() {
        let diagnostics = Diagnostics::default();
        // Port 1 is practically never listening; connection is refused fast.
        let client = reqwest::Client::new();
        let tag = detect_locale(
            None,
            Some("http://127.0.0.1:1/lang"),
            &client,
            &StubSystem(Some("en_GB")),
            &diagnostics,
        )
        .await;

        assert_eq!(tag.as_str(), "en-GB");
        let events = diagnostics.snapshot();
        assert!(events.iter().any(|event| matches!(
            event.kind,
            DiagnosticEventKind::DetectionSourceFailed {
                source: DetectionSource::Endpoint,
                ..
            }
        )));
    }

    #[tokio::test]
    async fn all_sources_failing_yields_hard_default() {
        let diagnostics = Diagnostics::default();
        let client = reqwest::Client::new();
        let tag = detect_locale(
            Some(&StubHost(Some("###"))),
            None,
            &client,
            &StubSystem(None),
            &diagnostics,
        )
        .await;

        assert_eq!(tag.as_str(), DEFAULT_LOCALE_TAG);
        assert_eq!(
            detected_sources(&diagnostics.snapshot()),
            vec![DetectionSource::Default]
        );
    }
}
