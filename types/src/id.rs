//! Numeric id newtypes for users and documents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a registered user (submitter, verifier, or issuer).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(u64);

impl UserId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

/// Identifies one submitted document record.
///
/// A re-submission keeps the same id; a brand-new submission after a
/// terminal decision allocates a fresh one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DocumentId(u64);

impl DocumentId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// The id that follows this one in allocation order.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "doc-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats() {
        assert_eq!(UserId::new(7).to_string(), "user-7");
        assert_eq!(DocumentId::new(42).to_string(), "doc-42");
    }

    #[test]
    fn document_id_next_increments() {
        assert_eq!(DocumentId::new(3).next(), DocumentId::new(4));
    }
}
