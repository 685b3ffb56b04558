//! In-memory key-value store for servers, tests and development.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::store::KeyValueStore;

/// In-memory string store.
///
/// Entries live as long as the store; there is no expiry or size bound.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let store = MemoryStore::new();
        assert_eq!(store.get("readme-pixels").unwrap(), None);

        store.set("readme-pixels", "# Pixels").unwrap();
        assert_eq!(store.get("readme-pixels").unwrap().as_deref(), Some("# Pixels"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_set_overwrites() {
        let store = MemoryStore::new();
        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear() {
        let store = MemoryStore::new();
        store.set("k", "v").unwrap();
        store.clear();
        assert!(store.is_empty());
    }
}
