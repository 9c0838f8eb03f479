// SPDX-License-Identifier: MPL-2.0
//! Session state and orchestration between detection, dictionaries, and the
//! catalog.
//!
//! The `Session` struct wires together the domains (locale, translations,
//! catalog) and owns all session-wide state: the active locale, the loaded
//! dictionaries, and the catalog cache. It has exactly two mutation points,
//! initialization and the user-facing locale change, so every other
//! consumer reads immutable state.

use crate::catalog::{Catalog, CatalogLoader};
use crate::config::{self, Config, DEFAULT_REMOTE_BASE};
use crate::diagnostics::Diagnostics;
use crate::i18n::detect::{detect_locale, HostLocaleSource, SystemLanguage, SystemLanguageSource};
use crate::i18n::dictionary::Dictionaries;
use crate::i18n::locale::{Locale, LocaleTag};
use crate::ui::Page;
use std::time::Duration;

/// Inputs to session initialization.
///
/// `host` is the embedder's locale hook; `endpoint` the optional
/// `{"lang": ...}` URL. `offline` disables remote catalog fetching.
#[derive(Default)]
pub struct SessionOptions<'a> {
    pub cli_lang: Option<String>,
    pub offline: bool,
    pub host: Option<&'a dyn HostLocaleSource>,
    pub endpoint: Option<String>,
}

/// Root session state: configuration, active locale, dictionaries, and the
/// catalog loader.
pub struct Session {
    config: Config,
    active: LocaleTag,
    locale: Locale,
    dictionaries: Dictionaries,
    diagnostics: Diagnostics,
    loader: CatalogLoader,
}

impl Session {
    /// Builds a session: resolves the locale, loads the dictionaries, and
    /// prepares the catalog loader.
    ///
    /// Locale precedence is CLI flag, persisted preference, then detection.
    /// Initialization cannot fail; every degraded input resolves to a
    /// default and is recorded in `diagnostics`.
    pub async fn initialize(
        options: SessionOptions<'_>,
        config: Config,
        diagnostics: Diagnostics,
    ) -> Self {
        Self::initialize_with_system(options, config, diagnostics, &SystemLanguageSource).await
    }

    /// As [`Session::initialize`], with an injectable system-language source.
    pub async fn initialize_with_system(
        options: SessionOptions<'_>,
        config: Config,
        diagnostics: Diagnostics,
        system: &dyn SystemLanguage,
    ) -> Self {
        let client = http_client(&config);

        let active = resolve_active_tag(&options, &config, &client, system, &diagnostics).await;
        let locale = Locale::normalize(Some(active.as_str()));

        let dictionaries = Dictionaries::load(diagnostics.clone());

        let remote_base = if options.offline {
            None
        } else {
            Some(
                config
                    .remote_base
                    .clone()
                    .unwrap_or_else(|| DEFAULT_REMOTE_BASE.to_string()),
            )
        };
        let loader = CatalogLoader::new(client, remote_base, diagnostics.clone());

        Self {
            config,
            active,
            locale,
            dictionaries,
            diagnostics,
            loader,
        }
    }

    /// Active full locale tag driving field and asset resolution.
    #[must_use]
    pub fn active_tag(&self) -> &LocaleTag {
        &self.active
    }

    /// Normalized locale driving dictionary lookups.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Dictionary lookup under the active locale.
    #[must_use]
    pub fn get_text(&self, key: &str) -> String {
        self.dictionaries.get_text(self.locale, key)
    }

    /// Switches the active locale in memory.
    ///
    /// Use [`apply_language_change`] for the user-facing path that also
    /// persists the preference.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.active = locale.tag();
    }

    /// Runs the full-page text-update pass against this session's state.
    pub fn apply_translations(&self, page: &mut Page) {
        page.apply_translations(&self.dictionaries, self.locale);
    }

    /// Loads both catalogs (remote-then-bundled, cached).
    pub async fn load_catalog(&self) -> Catalog {
        self.loader.load_all().await
    }
}

/// Applies the newly selected locale and persists it as the explicit user
/// preference, which takes precedence over detection on the next start.
pub fn apply_language_change(session: &mut Session, locale: Locale) {
    session.set_locale(locale);

    if cfg!(test) {
        return;
    }

    let mut cfg = config::load().unwrap_or_default();
    cfg.language = Some(locale.as_str().to_string());

    if let Err(error) = config::save(&cfg) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

fn http_client(config: &Config) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs()))
        .user_agent(concat!("AstraCenter/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_default()
}

async fn resolve_active_tag(
    options: &SessionOptions<'_>,
    config: &Config,
    client: &reqwest::Client,
    system: &dyn SystemLanguage,
    diagnostics: &Diagnostics,
) -> LocaleTag {
    // 1. Check CLI args
    if let Some(lang) = options.cli_lang.as_deref() {
        if let Some(tag) = LocaleTag::parse(lang) {
            return tag;
        }
    }

    // 2. Check the persisted user preference
    if let Some(lang) = config.language.as_deref() {
        if let Some(tag) = LocaleTag::parse(lang) {
            return tag;
        }
    }

    // 3. Detect from the environment
    detect_locale(
        options.host,
        options.endpoint.as_deref(),
        client,
        system,
        diagnostics,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSystem(Option<&'static str>);

    impl SystemLanguage for StubSystem {
        fn language(&self) -> Option<String> {
            self.0.map(str::to_owned)
        }
    }

    fn offline_options() -> SessionOptions<'static> {
        SessionOptions {
            offline: true,
            ..SessionOptions::default()
        }
    }

    async fn session_with(options: SessionOptions<'_>, config: Config) -> Session {
        Session::initialize_with_system(
            options,
            config,
            Diagnostics::default(),
            &StubSystem(Some("pt-BR")),
        )
        .await
    }

    #[tokio::test]
    async fn cli_flag_beats_config_and_detection() {
        let options = SessionOptions {
            cli_lang: Some("en".to_string()),
            ..offline_options()
        };
        let config = Config {
            language: Some("pt".to_string()),
            ..Config::default()
        };

        let session = session_with(options, config).await;
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.active_tag().as_str(), "en");
    }

    #[tokio::test]
    async fn persisted_preference_beats_detection() {
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };

        let session = session_with(offline_options(), config).await;
        assert_eq!(session.locale(), Locale::En);
    }

    #[tokio::test]
    async fn detection_is_used_when_nothing_is_pinned() {
        let session = session_with(offline_options(), Config::default()).await;

        assert_eq!(session.active_tag().as_str(), "pt-BR");
        assert_eq!(session.locale(), Locale::Pt);
    }

    #[tokio::test]
    async fn invalid_cli_flag_falls_through() {
        let options = SessionOptions {
            cli_lang: Some("???".to_string()),
            ..offline_options()
        };
        let config = Config {
            language: Some("en".to_string()),
            ..Config::default()
        };

        let session = session_with(options, config).await;
        assert_eq!(session.locale(), Locale::En);
    }

    #[tokio::test]
    async fn set_locale_switches_tag_and_dictionary_locale() {
        let mut session = session_with(offline_options(), Config::default()).await;
        assert_eq!(session.locale(), Locale::Pt);

        session.set_locale(Locale::En);
        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.active_tag().as_str(), "en");
    }

    #[tokio::test]
    async fn apply_language_change_switches_locale() {
        let mut session = session_with(offline_options(), Config::default()).await;

        apply_language_change(&mut session, Locale::En);

        assert_eq!(session.locale(), Locale::En);
        assert_eq!(session.active_tag().as_str(), "en");
    }

    #[tokio::test]
    async fn get_text_uses_bundled_dictionaries() {
        let mut session = session_with(offline_options(), Config::default()).await;

        assert_eq!(session.get_text("featured-heading"), "Destaques");
        session.set_locale(Locale::En);
        assert_eq!(session.get_text("featured-heading"), "Featured");
    }
}
