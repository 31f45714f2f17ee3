//! TrustNet verification workflow engine.
//!
//! A document moves `Submitted → Enriched → QueuedForReview → UnderReview`
//! and from there to a terminal `Approved`/`Rejected` or back to the
//! submitter via `AwaitingSubmitterAction`:
//! 1. **Submission**: a submitter uploads a document; a record is created.
//! 2. **Enrichment**: the external OCR/AI collaborator reports extracted
//!    fields, confidence scores, a recommendation, and risk flags.
//! 3. **Review**: a verifier claims the record from its priority-ordered
//!    queue and records an Approve/Reject/Pending decision.
//!
//! Queues are views derived from record state, never stored; every
//! mutation passes the role guards of the state machine; decisions are
//! compare-and-set against the record version.

pub mod decision;
pub mod engine;
pub mod enrichment;
pub mod error;
pub mod queue;
pub mod record;
pub mod report;

pub use decision::DecisionProcessor;
pub use engine::{SubmitRequest, WorkflowEngine, WorkflowEvent};
pub use enrichment::{EnrichmentIntake, MISSING_REQUIRED_FIELDS_FLAG};
pub use error::WorkflowError;
pub use queue::{QueueManager, QueueStats};
pub use record::DocumentRecord;
pub use report::csv_report;
