use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::StorageBackend;

/// In-memory StorageBackend for testing and non-wasm fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.lock().unwrap().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_item(&self, key: &str) {
        self.items.lock().unwrap().remove(key);
    }

    fn clear(&self) {
        self.items.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();

        assert!(store.get_item("k").is_none());

        store.set_item("k", "v");
        assert_eq!(store.get_item("k").as_deref(), Some("v"));

        store.set_item("k", "v2");
        assert_eq!(store.get_item("k").as_deref(), Some("v2"));

        store.remove_item("k");
        assert!(store.get_item("k").is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_item("k", "v");
        assert_eq!(other.get_item("k").as_deref(), Some("v"));

        other.clear();
        assert!(store.get_item("k").is_none());
    }
}
