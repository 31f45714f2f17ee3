use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("store file is corrupted: {0}")]
    Corruption(String),
}

impl StoreError {
    /// Wrap an I/O failure from a file-backed store.
    pub fn io(err: std::io::Error) -> Self {
        Self::Backend(err.to_string())
    }
}
