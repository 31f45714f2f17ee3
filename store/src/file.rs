//! JSON-file store backend for the CLI.
//!
//! The whole store is one JSON document: a map from document id to its
//! queue key and hex-encoded blob. Every write rewrites the file via a
//! temporary sibling and rename, so a crashed write leaves the previous
//! image intact.

use crate::{DocumentStore, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use trustnet_types::{DocumentId, QueueKey};

#[derive(Debug, Default, Serialize, Deserialize)]
struct FileImage {
    documents: BTreeMap<u64, StoredBlob>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredBlob {
    queue: QueueKey,
    data: String,
}

/// A [`DocumentStore`] persisted as a single JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    inner: RwLock<FileImage>,
}

impl FileStore {
    /// Open the store at `path`, loading any existing image.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let image = if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(StoreError::io)?;
            serde_json::from_str(&contents)
                .map_err(|e| StoreError::Corruption(format!("{}: {e}", path.display())))?
        } else {
            FileImage::default()
        };
        tracing::debug!(path = %path.display(), records = image.documents.len(), "opened file store");
        Ok(Self {
            path,
            inner: RwLock::new(image),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, image: &FileImage) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(image)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, contents).map_err(StoreError::io)?;
        std::fs::rename(&tmp, &self.path).map_err(StoreError::io)?;
        Ok(())
    }

    fn decode(blob: &StoredBlob) -> Result<Vec<u8>, StoreError> {
        hex::decode(&blob.data).map_err(|e| StoreError::Corruption(e.to_string()))
    }
}

impl DocumentStore for FileStore {
    fn put(&self, id: DocumentId, queue: QueueKey, data: &[u8]) -> Result<(), StoreError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        inner.documents.insert(
            id.as_u64(),
            StoredBlob {
                queue,
                data: hex::encode(data),
            },
        );
        self.persist(&inner)
    }

    fn get(&self, id: DocumentId) -> Result<Option<Vec<u8>>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        inner
            .documents
            .get(&id.as_u64())
            .map(Self::decode)
            .transpose()
    }

    fn list_by_queue(&self, queue: QueueKey) -> Result<Vec<Vec<u8>>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        inner
            .documents
            .values()
            .filter(|blob| blob.queue == queue)
            .map(Self::decode)
            .collect()
    }

    fn list_all(&self) -> Result<Vec<Vec<u8>>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        inner.documents.values().map(Self::decode).collect()
    }

    fn max_id(&self) -> Result<Option<DocumentId>, StoreError> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Backend("store lock poisoned".into()))?;
        Ok(inner.documents.keys().next_back().map(|&n| DocumentId::new(n)))
    }
}
