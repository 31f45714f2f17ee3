//! Queue keys — derived, never stored.

use crate::DocumentState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which logical queue a record belongs to.
///
/// Membership is a pure function of the record's state; a record is in
/// exactly one queue at any time, and nothing persists this separately.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueueKey {
    /// Submitted or enriched, not yet visible to verifiers.
    Intake,
    /// In the verifier review pipeline.
    Review,
    /// Returned to the submitter for more information.
    AwaitingSubmitter,
    /// Terminal (approved or rejected), retained for audit.
    Completed,
}

impl QueueKey {
    /// Derive the queue for a state. Total over all states.
    pub fn for_state(state: DocumentState) -> Self {
        match state {
            DocumentState::Submitted | DocumentState::Enriched => Self::Intake,
            DocumentState::QueuedForReview | DocumentState::UnderReview => Self::Review,
            DocumentState::AwaitingSubmitterAction => Self::AwaitingSubmitter,
            DocumentState::Approved | DocumentState::Rejected => Self::Completed,
        }
    }

    /// All queue keys, for backends that iterate per-queue.
    pub const ALL: [QueueKey; 4] = [
        Self::Intake,
        Self::Review,
        Self::AwaitingSubmitter,
        Self::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Intake => "intake",
            Self::Review => "review",
            Self::AwaitingSubmitter => "awaiting-submitter",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for QueueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_states_map_to_review_queue() {
        assert_eq!(
            QueueKey::for_state(DocumentState::QueuedForReview),
            QueueKey::Review
        );
        assert_eq!(
            QueueKey::for_state(DocumentState::UnderReview),
            QueueKey::Review
        );
    }

    #[test]
    fn terminal_states_map_to_completed() {
        assert_eq!(QueueKey::for_state(DocumentState::Approved), QueueKey::Completed);
        assert_eq!(QueueKey::for_state(DocumentState::Rejected), QueueKey::Completed);
    }

    #[test]
    fn every_state_has_exactly_one_queue() {
        let states = [
            DocumentState::Submitted,
            DocumentState::Enriched,
            DocumentState::QueuedForReview,
            DocumentState::UnderReview,
            DocumentState::Approved,
            DocumentState::Rejected,
            DocumentState::AwaitingSubmitterAction,
        ];
        for state in states {
            let key = QueueKey::for_state(state);
            assert_eq!(QueueKey::ALL.iter().filter(|k| **k == key).count(), 1);
        }
    }
}
