//! Server-supplied message bundles, one JSON file per locale.
//!
//! Folder layout (relative to this crate root):
//! ```text
//! messages/
//!   en.json   (reference: every other locale has exactly its shape)
//!   fr.json
//!   ar.json
//!   de.json
//! ```
//!
//! To add a locale: add a `LocaleCode` variant, copy `en.json` to
//! `messages/<code>.json`, translate the values (keep keys and list lengths),
//! and run the tests.
use std::collections::BTreeMap;

use api::MessageBundle;
use once_cell::sync::Lazy;
use rust_embed::Embed;

use crate::core::locale::LocaleCode;

#[derive(Embed)]
#[folder = "messages"]
struct Bundles;

static PARSED: Lazy<BTreeMap<LocaleCode, MessageBundle>> = Lazy::new(|| {
    LocaleCode::ALL
        .into_iter()
        .map(|locale| (locale, load(locale)))
        .collect()
});

fn load(locale: LocaleCode) -> MessageBundle {
    let file = format!("{locale}.json");
    let Some(asset) = Bundles::get(&file) else {
        tracing::error!(%locale, "missing embedded message bundle");
        return MessageBundle::new();
    };
    let raw = String::from_utf8_lossy(&asset.data);
    MessageBundle::from_json(&raw).unwrap_or_else(|err| {
        tracing::error!(%locale, "invalid embedded message bundle: {err}");
        MessageBundle::new()
    })
}

/// The bundle the server renders `locale` with.
pub fn server_bundle(locale: LocaleCode) -> MessageBundle {
    PARSED.get(&locale).cloned().unwrap_or_default()
}

/// Locale codes with an embedded bundle file.
pub fn available_locales() -> Vec<String> {
    let mut codes: Vec<String> = Bundles::iter()
        .filter_map(|path| path.strip_suffix(".json").map(str::to_string))
        .collect();
    codes.sort();
    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_has_a_bundle() {
        let available = available_locales();
        for locale in LocaleCode::ALL {
            assert!(
                available.iter().any(|code| code == locale.as_str()),
                "missing messages/{locale}.json"
            );
            assert!(!server_bundle(locale).is_empty(), "{locale} bundle is empty");
        }
    }

    #[test]
    fn reference_lookup_works() {
        let en = server_bundle(LocaleCode::En);
        assert_eq!(en.text("nav.home"), "Home");
    }

    #[test]
    fn every_locale_matches_reference_shape() {
        let reference = server_bundle(LocaleCode::En);
        for locale in LocaleCode::ALL {
            assert!(
                reference.same_shape(&server_bundle(locale)),
                "{locale} bundle differs in structure from en"
            );
        }
    }
}
