//! Preference Store: small, synchronous key-value persistence for language
//! preferences and cached translations.
//!
//! All operations fail soft. A store that cannot read behaves like an empty
//! one and a failed write is logged and dropped; losing a cached translation
//! only costs a refetch.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Key of the currently active free-form language.
pub const AUTO_LANG_KEY: &str = "autoLang";

/// Key holding the cached bundle for `lang`.
pub fn bundle_cache_key(lang: &str) -> String {
    format!("msgs_{lang}")
}

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// to inspect what the manager persisted.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::*;
    use std::collections::BTreeMap;
    use std::fs;
    use std::path::PathBuf;

    /// JSON map persisted under the platform data directory.
    #[derive(Debug)]
    pub struct FileStore {
        path: PathBuf,
        entries: RefCell<BTreeMap<String, String>>,
    }

    impl FileStore {
        /// Open (or lazily create) a store at `path`. Unreadable or corrupt
        /// files start empty.
        pub fn open(path: impl Into<PathBuf>) -> Self {
            let path = path.into();
            let entries = match fs::read_to_string(&path) {
                Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
                    tracing::warn!(path = %path.display(), "discarding corrupt preference file: {err}");
                    BTreeMap::new()
                }),
                Err(_) => BTreeMap::new(),
            };
            Self {
                path,
                entries: RefCell::new(entries),
            }
        }

        pub fn default_location() -> Option<PathBuf> {
            directories::ProjectDirs::from("dev", "folio", "folio")
                .map(|dirs| dirs.data_dir().join("preferences.json"))
        }

        fn flush(&self) {
            let result = (|| -> std::io::Result<()> {
                if let Some(parent) = self.path.parent() {
                    fs::create_dir_all(parent)?;
                }
                let raw = serde_json::to_string_pretty(&*self.entries.borrow())?;
                fs::write(&self.path, raw)
            })();
            if let Err(err) = result {
                tracing::warn!(path = %self.path.display(), "failed to persist preferences: {err}");
            }
        }
    }

    impl PreferenceStore for FileStore {
        fn get(&self, key: &str) -> Option<String> {
            self.entries.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            self.entries
                .borrow_mut()
                .insert(key.to_string(), value.to_string());
            self.flush();
        }

        fn remove(&self, key: &str) {
            let removed = self.entries.borrow_mut().remove(key).is_some();
            if removed {
                self.flush();
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::PreferenceStore;

    /// `window.localStorage`, scoped to the site's origin.
    pub struct BrowserStore {
        storage: web_sys::Storage,
    }

    impl BrowserStore {
        /// `None` when storage is unavailable (privacy mode, sandboxed iframe).
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok().flatten()?;
            Some(Self { storage })
        }
    }

    impl PreferenceStore for BrowserStore {
        fn get(&self, key: &str) -> Option<String> {
            self.storage.get_item(key).ok().flatten()
        }

        fn set(&self, key: &str, value: &str) {
            if let Err(err) = self.storage.set_item(key, value) {
                tracing::warn!(key, "localStorage write failed: {err:?}");
            }
        }

        fn remove(&self, key: &str) {
            if let Err(err) = self.storage.remove_item(key) {
                tracing::warn!(key, "localStorage remove failed: {err:?}");
            }
        }
    }
}

/// The persistent store for the current platform, or an in-memory one when
/// persistence is unavailable.
pub fn default_store() -> Box<dyn PreferenceStore> {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(store) = BrowserStore::open() {
            return Box::new(store);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Some(path) = FileStore::default_location() {
            return Box::new(FileStore::open(path));
        }
    }

    tracing::warn!("no persistent preference storage; preferences last for this session only");
    Box::new(MemoryStore::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();
        store.set(AUTO_LANG_KEY, "it");
        assert_eq!(handle.get(AUTO_LANG_KEY).as_deref(), Some("it"));
        handle.remove(AUTO_LANG_KEY);
        assert!(store.is_empty());
    }

    #[test]
    fn cache_keys_are_namespaced() {
        assert_eq!(bundle_cache_key("it"), "msgs_it");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let store = FileStore::open(&path);
        store.set(AUTO_LANG_KEY, "ja");
        store.set(&bundle_cache_key("ja"), r#"{"hero":{"title":"こんにちは"}}"#);
        store.remove("never-set");

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(AUTO_LANG_KEY).as_deref(), Some("ja"));
        assert!(reopened.get("msgs_ja").unwrap().contains("こんにちは"));

        reopened.remove(AUTO_LANG_KEY);
        assert!(FileStore::open(&path).get(AUTO_LANG_KEY).is_none());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn corrupt_file_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get(AUTO_LANG_KEY).is_none());
        store.set(AUTO_LANG_KEY, "it");
        assert_eq!(FileStore::open(&path).get(AUTO_LANG_KEY).as_deref(), Some("it"));
    }
}
