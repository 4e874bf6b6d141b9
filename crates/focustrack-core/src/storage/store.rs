//! Key-value store abstraction.
//!
//! The ledger, todo list, daily goal, and theme preference all persist as
//! independently keyed JSON values. No transactions, no TTL, last write
//! wins. [`super::Database`] is the on-disk implementation; [`MemoryStore`]
//! backs tests and embedders that want no persistence.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::StoreError;

/// Synchronous get/set of named JSON values.
pub trait KeyValueStore {
    /// Fetch a value. Absent keys and values that no longer parse as JSON
    /// both come back as `None`.
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Store a value, replacing any previous one.
    fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError>;
}

/// In-memory store. Single-threaded, like the rest of the core.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key currently exists. Used by tests to verify that reads
    /// never create ledger entries.
    pub fn contains(&self, key: &str) -> bool {
        self.values.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.get("missing").unwrap().is_none());

        store.set("k", &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(store.get("k").unwrap().unwrap()["a"], 1);
    }

    #[test]
    fn set_replaces_previous_value() {
        let store = MemoryStore::new();
        store.set("k", &serde_json::json!(1)).unwrap();
        store.set("k", &serde_json::json!(2)).unwrap();
        assert_eq!(store.get("k").unwrap().unwrap(), serde_json::json!(2));
    }
}
