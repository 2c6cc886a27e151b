//! Translation Preference Manager.
//!
//! Decides which [`MessageBundle`] the UI renders and mediates every
//! language change:
//!
//! - a standard locale switch clears auto-translation and navigates to the
//!   same page under the new locale (fresh server render, no caching);
//! - an auto-translation to a free-form language reuses the bundle cached in
//!   the [`PreferenceStore`] or fetches one through a [`BundleTranslator`].
//!
//! Fetching is split in two so the UI never holds the manager across an
//! await: [`TranslationManager::begin`] returns a [`FetchTicket`] on a cache
//! miss, the caller runs the translator, then hands the result to
//! [`TranslationManager::complete`]. Every `begin` bumps a generation
//! counter; a completion carrying an older generation is cached but not
//! adopted, so the newest request always wins.

use api::{MessageBundle, TranslateError};

use crate::core::locale::{localized_path, Direction, LocaleCode};
use crate::core::storage::{bundle_cache_key, PreferenceStore, AUTO_LANG_KEY};
use crate::translation::client::BundleTranslator;

/// Shown when an auto-translation cannot be fetched.
pub const TRANSLATION_FAILED_ALERT: &str =
    "Translation failed. Please check API key or try again.";

/// Result of [`TranslationManager::begin`].
#[derive(Debug)]
pub enum Step {
    /// The request was settled synchronously (reset or cache hit).
    Done,
    /// Cache miss: translate `ticket.source` into `ticket.lang`, then call `complete`.
    Fetch(FetchTicket),
}

/// A pending translation issued by the manager.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    pub lang: String,
    pub source: MessageBundle,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The requested language (or the reset) is now active.
    Applied,
    /// A newer request superseded this one; nothing visible changed.
    Superseded,
    /// The fetch failed; auto-translation was reverted. Show `message`.
    Failed { message: String },
}

#[derive(Debug, Clone)]
struct Translation {
    lang: String,
    bundle: MessageBundle,
}

pub struct TranslationManager {
    locale: LocaleCode,
    server_bundle: MessageBundle,
    auto_lang: Option<String>,
    translation: Option<Translation>,
    loading: bool,
    generation: u64,
    store: Box<dyn PreferenceStore>,
}

impl TranslationManager {
    /// Manager for a page rendered in `locale` that has not looked at the
    /// store yet.
    pub fn new(
        locale: LocaleCode,
        server_bundle: MessageBundle,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        Self {
            locale,
            server_bundle,
            auto_lang: None,
            translation: None,
            loading: false,
            generation: 0,
            store,
        }
    }

    /// [`new`](Self::new) followed by [`restore_saved`](Self::restore_saved).
    pub fn restore(
        locale: LocaleCode,
        server_bundle: MessageBundle,
        store: Box<dyn PreferenceStore>,
    ) -> Self {
        let mut manager = Self::new(locale, server_bundle, store);
        manager.restore_saved();
        manager
    }

    /// Adopt the persisted auto-language, if any. It is adopted only when it
    /// differs from the locale and its cached bundle is still readable.
    /// Returns whether a translation was restored.
    pub fn restore_saved(&mut self) -> bool {
        let Some(lang) = self.store.get(AUTO_LANG_KEY) else {
            return false;
        };
        if self.locale.matches(&lang) {
            return false;
        }
        let Some(bundle) = self.cached_bundle(&lang) else {
            return false;
        };

        tracing::debug!(lang = %lang, "restored auto-translation");
        self.auto_lang = Some(lang.clone());
        self.translation = Some(Translation { lang, bundle });
        true
    }

    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    pub fn auto_lang(&self) -> Option<&str> {
        self.auto_lang.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Language tag the page is currently rendered in. While a translation
    /// is loading this is still the locale.
    pub fn active_lang(&self) -> &str {
        match self.loaded() {
            Some(translation) => &translation.lang,
            None => self.locale.as_str(),
        }
    }

    pub fn direction(&self) -> Direction {
        match self.loaded() {
            Some(translation) => Direction::for_language(&translation.lang),
            None => self.locale.direction(),
        }
    }

    /// The translated bundle when one is loaded for the active auto-language,
    /// otherwise the server-supplied bundle.
    pub fn active_bundle(&self) -> &MessageBundle {
        match self.loaded() {
            Some(translation) => &translation.bundle,
            None => &self.server_bundle,
        }
    }

    fn loaded(&self) -> Option<&Translation> {
        match (&self.auto_lang, &self.translation) {
            (Some(lang), Some(translation)) if translation.lang == *lang => Some(translation),
            _ => None,
        }
    }

    /// Start a language change. `None`, blank input, or the current locale
    /// reset to the server bundle.
    pub fn begin(&mut self, lang: Option<&str>) -> Step {
        self.generation += 1;

        let lang = lang.map(str::trim).filter(|lang| !lang.is_empty());
        let lang = match lang {
            Some(lang) if !self.locale.matches(lang) => lang.to_ascii_lowercase(),
            _ => {
                self.clear_auto();
                return Step::Done;
            }
        };

        self.auto_lang = Some(lang.clone());

        if let Some(bundle) = self.cached_bundle(&lang) {
            tracing::debug!(lang = %lang, "auto-translation cache hit");
            self.loading = false;
            self.store.set(AUTO_LANG_KEY, &lang);
            self.translation = Some(Translation { lang, bundle });
            return Step::Done;
        }

        self.loading = true;
        Step::Fetch(FetchTicket {
            lang,
            source: self.server_bundle.clone(),
            generation: self.generation,
        })
    }

    /// Settle a fetch started by [`begin`](Self::begin).
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<MessageBundle, TranslateError>,
    ) -> Outcome {
        let FetchTicket {
            lang, generation, ..
        } = ticket;

        if generation != self.generation {
            if let Ok(bundle) = &result {
                self.cache_bundle(&lang, bundle);
            }
            tracing::debug!(lang = %lang, "discarding superseded translation");
            return Outcome::Superseded;
        }

        self.loading = false;
        match result {
            Ok(bundle) => {
                self.cache_bundle(&lang, &bundle);
                self.store.set(AUTO_LANG_KEY, &lang);
                tracing::info!(lang = %lang, "auto-translation applied");
                self.translation = Some(Translation { lang, bundle });
                Outcome::Applied
            }
            Err(err) => {
                tracing::warn!(lang = %lang, "auto-translation failed: {err}");
                self.auto_lang = None;
                self.store.remove(AUTO_LANG_KEY);
                Outcome::Failed {
                    message: TRANSLATION_FAILED_ALERT.to_string(),
                }
            }
        }
    }

    /// `begin` + translate + `complete`, for callers holding the manager
    /// exclusively across the await.
    pub async fn set_language<T>(&mut self, lang: Option<&str>, translator: &T) -> Outcome
    where
        T: BundleTranslator + ?Sized,
    {
        match self.begin(lang) {
            Step::Done => Outcome::Applied,
            Step::Fetch(ticket) => {
                let result = translator.translate(&ticket.source, &ticket.lang).await;
                self.complete(ticket, result)
            }
        }
    }

    /// Standard locale switch: drop auto-translation and return the path to
    /// navigate to. The new page is rendered by the server from scratch.
    pub fn switch_locale(&mut self, target: LocaleCode, current_path: &str) -> String {
        self.generation += 1;
        self.clear_auto();
        localized_path(current_path, target)
    }

    fn clear_auto(&mut self) {
        self.auto_lang = None;
        self.translation = None;
        self.loading = false;
        self.store.remove(AUTO_LANG_KEY);
    }

    fn cached_bundle(&self, lang: &str) -> Option<MessageBundle> {
        let raw = self.store.get(&bundle_cache_key(lang))?;
        match MessageBundle::from_json(&raw) {
            Ok(bundle) => Some(bundle),
            Err(err) => {
                tracing::warn!(lang, "ignoring unreadable cached bundle: {err}");
                None
            }
        }
    }

    fn cache_bundle(&self, lang: &str, bundle: &MessageBundle) {
        match bundle.to_json() {
            Ok(raw) => self.store.set(&bundle_cache_key(lang), &raw),
            Err(err) => tracing::warn!(lang, "could not serialize bundle: {err}"),
        }
    }
}
