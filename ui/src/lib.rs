//! Shared UI crate for Folio: locales, the translation preference manager,
//! components and views. Platform crates supply routing and wire the
//! manager into context with [`provide_translation`].

use dioxus::prelude::*;

pub mod components;
pub mod contact;
pub mod core;
pub mod messages;
pub mod translation;
pub mod views;

use crate::core::locale::LocaleCode;
use crate::core::storage::PreferenceStore;
use crate::translation::TranslationManager;

/// Install the manager for `locale` (embedded bundle + `store`) into context.
///
/// The first render always uses the server bundle so hydration matches the
/// server-rendered HTML; a persisted auto-translation is applied once the
/// component has mounted.
pub fn provide_translation(
    locale: LocaleCode,
    store: impl FnOnce() -> Box<dyn PreferenceStore>,
) -> Signal<TranslationManager> {
    let mut manager = use_context_provider(|| {
        Signal::new(TranslationManager::new(
            locale,
            messages::server_bundle(locale),
            store(),
        ))
    });

    use_effect(move || {
        manager.write().restore_saved();
    });

    manager
}

/// The manager installed by [`provide_translation`].
pub fn use_translation() -> Signal<TranslationManager> {
    use_context::<Signal<TranslationManager>>()
}
