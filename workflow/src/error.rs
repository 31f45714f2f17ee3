use thiserror::Error;
use trustnet_store::StoreError;
use trustnet_types::{DecisionKind, DocumentId, DocumentState, UserId};

/// Everything the workflow can refuse to do.
///
/// All variants are local, non-retryable caller errors surfaced at the
/// call boundary; none are fatal to the engine. Retry policy after a
/// [`Conflict`](WorkflowError::Conflict) is the caller's decision.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("{actor} is not authorized to {action}")]
    Unauthorized { actor: UserId, action: &'static str },

    #[error("{document} is {from}, cannot {trigger}")]
    InvalidStateTransition {
        document: DocumentId,
        from: DocumentState,
        trigger: &'static str,
    },

    #[error("{0} not found")]
    RecordNotFound(DocumentId),

    #[error("a {decision} decision requires remarks")]
    MissingRemarks { decision: DecisionKind },

    #[error("{document} was modified concurrently: expected version {expected}, current {current}")]
    Conflict {
        document: DocumentId,
        expected: u64,
        current: u64,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}
