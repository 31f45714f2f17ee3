//! Abstract storage contract for TrustNet document records.
//!
//! Every backend (in-memory for tests and single-process use, JSON file for
//! the CLI, a database in a larger deployment) implements [`DocumentStore`].
//! The workflow engine depends only on the trait.
//!
//! Records are stored as opaque blobs keyed by document id, indexed by
//! their derived [`QueueKey`]. A `put` replaces the previous blob *and* its
//! queue membership in one step, so a record is never observable in two
//! queues at once.

pub mod error;
pub mod file;
pub mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

use trustnet_types::{DocumentId, QueueKey};

/// Trait for storing serialized document records.
pub trait DocumentStore {
    /// Store (or replace) the blob for a document, migrating it to `queue`.
    fn put(&self, id: DocumentId, queue: QueueKey, data: &[u8]) -> Result<(), StoreError>;

    /// Fetch the blob for a document, if present.
    fn get(&self, id: DocumentId) -> Result<Option<Vec<u8>>, StoreError>;

    /// All blobs currently in `queue`, ordered by document id.
    fn list_by_queue(&self, queue: QueueKey) -> Result<Vec<Vec<u8>>, StoreError>;

    /// All blobs system-wide, ordered by document id.
    fn list_all(&self) -> Result<Vec<Vec<u8>>, StoreError>;

    /// The highest document id currently stored, if any. Used to seed the
    /// engine's id allocator.
    fn max_id(&self) -> Result<Option<DocumentId>, StoreError>;
}
