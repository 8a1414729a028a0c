//! Key-value persistence behind the configuration store.
//!
//! In the browser this is `window.localStorage`; when that is unavailable
//! (privacy mode, sandboxed iframes) settings live in memory for the session.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::ConfigError;
use crate::warn_log;

pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ConfigError>;
}

/// `window.localStorage`.
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    pub fn open() -> Result<Self, ConfigError> {
        let window = web_sys::window()
            .ok_or_else(|| ConfigError::StorageUnavailable("no global window exists".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ConfigError::StorageUnavailable(format!("{:?}", e)))?
            .ok_or_else(|| ConfigError::StorageUnavailable("no local storage exists".into()))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.storage
            .get_item(key)
            .map_err(|e| ConfigError::StorageUnavailable(format!("{:?}", e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| ConfigError::StorageWrite(format!("{:?}", e)))
    }
}

/// Session-only storage. Clones share the same map.
#[derive(Clone, Default, Debug)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    reads: Rc<Cell<usize>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry; the seed is not counted as a write.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.items.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    /// Number of `get_item` calls so far.
    pub fn read_count(&self) -> usize {
        self.reads.get()
    }

    /// Number of `set_item` calls so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ConfigError> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.item(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

/// localStorage if it can be opened, otherwise an in-memory fallback.
pub fn open_browser_storage() -> Box<dyn KeyValueStore> {
    match LocalStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(e) => {
            warn_log!("{}; settings will not survive a reload", e);
            Box::new(MemoryStorage::new())
        }
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_round_trips_a_value() {
        let storage = LocalStorage::open().expect("localStorage in test browser");
        storage.set_item("rag-settings-test", "{}").unwrap();
        assert_eq!(
            storage.get_item("rag-settings-test").unwrap().as_deref(),
            Some("{}")
        );
    }
}
