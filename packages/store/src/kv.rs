//! # Key-value persistence for small JSON blobs
//!
//! The mock store keeps exactly two durable values: the modification log
//! and (in the app shell) the theme preference. [`KeyValueStore`] is the
//! small synchronous interface both live behind:
//!
//! | Implementation | Platform | Backing |
//! |----------------|----------|---------|
//! | [`LocalStorageKv`] | wasm | `window.localStorage` |
//! | [`FileKv`] | native | one file per key under a base directory |
//! | [`MemoryKv`] | tests | `HashMap` behind a mutex |
//!
//! Writes are whole-blob read-modify-write with no concurrency token, so
//! two tabs sharing one localStorage can clobber each other's log. That is
//! the accepted single-operator model.

#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

/// Synchronous string-keyed storage for small JSON blobs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryKv {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

/// Filesystem-backed store: one file per key under `base`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Clone, Debug)]
pub struct FileKv {
    base: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileKv {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.path(key)).ok()
    }

    fn set(&self, key: &str, value: &str) {
        let path = self.path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let _ = std::fs::write(path, value);
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.path(key));
    }
}

/// Browser localStorage. Absent storage (disabled, sandboxed iframe)
/// degrades to a store that reads nothing and drops writes.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Debug, Default)]
pub struct LocalStorageKv;

#[cfg(target_arch = "wasm32")]
impl LocalStorageKv {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for LocalStorageKv {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_kv_roundtrip() {
        let kv = MemoryKv::new();
        assert!(kv.get("k").is_none());
        kv.set("k", "v");
        assert_eq!(kv.get("k").as_deref(), Some("v"));
        kv.remove("k");
        assert!(kv.get("k").is_none());
    }

    #[test]
    fn memory_kv_clones_share_entries() {
        let kv = MemoryKv::new();
        let other = kv.clone();
        kv.set("k", "v");
        assert_eq!(other.get("k").as_deref(), Some("v"));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn file_kv_roundtrip() {
        let dir = std::env::temp_dir().join(format!("userdesk_kv_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let kv = FileKv::new(dir.clone());
        kv.set("k", "v");

        // Re-open from the same directory
        let kv2 = FileKv::new(dir.clone());
        assert_eq!(kv2.get("k").as_deref(), Some("v"));
        kv2.remove("k");
        assert!(kv.get("k").is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
