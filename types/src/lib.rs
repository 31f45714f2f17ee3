//! Fundamental types for the TrustNet verification workflow.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: ids, roles, document vocabulary, enrichment payloads, state
//! enums, queue keys, and timestamps.

pub mod document;
pub mod enrichment;
pub mod fields;
pub mod id;
pub mod identity;
pub mod queue;
pub mod role;
pub mod state;
pub mod time;

pub use document::{DocumentType, FileKind, FileReference, Priority};
pub use enrichment::{AiRecommendation, Confidence, EnrichmentReport};
pub use fields::{ExtractedFields, FieldKind};
pub use id::{DocumentId, UserId};
pub use identity::Identity;
pub use queue::QueueKey;
pub use role::Role;
pub use state::{DecisionKind, DocumentState};
pub use time::Timestamp;
