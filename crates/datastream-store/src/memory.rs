//! In-memory reference store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use datastream_core::Datastream;

use crate::{DatastreamStore, StoreError, StoreResult};

/// In-memory [`DatastreamStore`] backed by a `RwLock<BTreeMap>`.
///
/// The create path holds the write lock across the presence check and the
/// insert, so concurrent creates under one name resolve to exactly one
/// winner. Enumeration order is lexicographic by name.
#[derive(Debug, Default)]
pub struct MemoryStore {
    datastreams: RwLock<BTreeMap<String, Datastream>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.datastreams.read().len()
    }

    /// Returns `true` if no definitions are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.datastreams.read().is_empty()
    }
}

#[async_trait]
impl DatastreamStore for MemoryStore {
    async fn create(&self, name: &str, datastream: Datastream) -> StoreResult<()> {
        let mut map = self.datastreams.write();
        if map.contains_key(name) {
            return Err(StoreError::AlreadyExists(name.to_string()));
        }
        map.insert(name.to_string(), datastream);
        Ok(())
    }

    async fn get(&self, name: &str) -> StoreResult<Option<Datastream>> {
        Ok(self.datastreams.read().get(name).cloned())
    }

    async fn list_names(&self) -> StoreResult<Vec<String>> {
        Ok(self.datastreams.read().keys().cloned().collect())
    }

    async fn delete(&self, name: &str) -> StoreResult<()> {
        self.datastreams.write().remove(name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn definition(name: &str) -> Datastream {
        Datastream {
            name: name.to_string(),
            connector_type: "kafka".to_string(),
            ..Datastream::default()
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = MemoryStore::new();
        store.create("a", definition("a")).await.unwrap();
        let got = store.get("a").await.unwrap().unwrap();
        assert_eq!(got.name, "a");
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let store = MemoryStore::new();
        store.create("a", definition("a")).await.unwrap();
        let err = store.create("a", definition("a")).await.unwrap_err();
        assert!(matches!(err, StoreError::AlreadyExists(name) if name == "a"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn get_absent_is_none_not_error() {
        let store = MemoryStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_names_is_lexicographic() {
        let store = MemoryStore::new();
        for name in ["charlie", "alpha", "bravo"] {
            store.create(name, definition(name)).await.unwrap();
        }
        let names = store.list_names().await.unwrap();
        assert_eq!(names, vec!["alpha", "bravo", "charlie"]);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        store.create("a", definition("a")).await.unwrap();
        store.delete("a").await.unwrap();
        store.delete("a").await.unwrap();
        assert!(store.get("a").await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn deleted_name_is_reusable() {
        let store = MemoryStore::new();
        store.create("a", definition("a")).await.unwrap();
        store.delete("a").await.unwrap();
        store.create("a", definition("a")).await.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_creates_have_one_winner() {
        let store = Arc::new(MemoryStore::new());
        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                store.create("contended", definition("contended")).await
            }));
        }
        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                winners += 1;
            }
        }
        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
