//! In-memory store backend, for tests and single-process deployments.

use crate::{DocumentStore, StoreError};
use std::collections::BTreeMap;
use std::sync::RwLock;
use trustnet_types::{DocumentId, QueueKey};

/// A [`DocumentStore`] holding everything in a process-local map.
///
/// The map is keyed by document id (ordered), so listings are stable
/// without extra sorting.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<BTreeMap<DocumentId, (QueueKey, Vec<u8>)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DocumentStore for MemoryStore {
    fn put(&self, id: DocumentId, queue: QueueKey, data: &[u8]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        inner.insert(id, (queue, data.to_vec()));
        Ok(())
    }

    fn get(&self, id: DocumentId) -> Result<Option<Vec<u8>>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        Ok(inner.get(&id).map(|(_, data)| data.clone()))
    }

    fn list_by_queue(&self, queue: QueueKey) -> Result<Vec<Vec<u8>>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        Ok(inner
            .values()
            .filter(|(q, _)| *q == queue)
            .map(|(_, data)| data.clone())
            .collect())
    }

    fn list_all(&self) -> Result<Vec<Vec<u8>>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        Ok(inner.values().map(|(_, data)| data.clone()).collect())
    }

    fn max_id(&self) -> Result<Option<DocumentId>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        Ok(inner.keys().next_back().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> DocumentId {
        DocumentId::new(n)
    }

    #[test]
    fn put_then_get() {
        let store = MemoryStore::new();
        store.put(id(1), QueueKey::Intake, b"alpha").unwrap();
        assert_eq!(store.get(id(1)).unwrap(), Some(b"alpha".to_vec()));
        assert_eq!(store.get(id(2)).unwrap(), None);
    }

    #[test]
    fn put_migrates_queue_atomically() {
        let store = MemoryStore::new();
        store.put(id(1), QueueKey::Review, b"v1").unwrap();
        assert_eq!(store.list_by_queue(QueueKey::Review).unwrap().len(), 1);

        store.put(id(1), QueueKey::Completed, b"v2").unwrap();
        assert!(store.list_by_queue(QueueKey::Review).unwrap().is_empty());
        assert_eq!(
            store.list_by_queue(QueueKey::Completed).unwrap(),
            vec![b"v2".to_vec()]
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn listings_ordered_by_id() {
        let store = MemoryStore::new();
        store.put(id(3), QueueKey::Review, b"c").unwrap();
        store.put(id(1), QueueKey::Review, b"a").unwrap();
        store.put(id(2), QueueKey::Completed, b"b").unwrap();

        assert_eq!(
            store.list_by_queue(QueueKey::Review).unwrap(),
            vec![b"a".to_vec(), b"c".to_vec()]
        );
        assert_eq!(
            store.list_all().unwrap(),
            vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]
        );
    }

    #[test]
    fn max_id_tracks_highest() {
        let store = MemoryStore::new();
        assert_eq!(store.max_id().unwrap(), None);
        store.put(id(5), QueueKey::Intake, b"x").unwrap();
        store.put(id(2), QueueKey::Intake, b"y").unwrap();
        assert_eq!(store.max_id().unwrap(), Some(id(5)));
    }
}
