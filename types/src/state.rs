//! Lifecycle state of a document record and the decision vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Where a document record sits in the verification lifecycle.
///
/// `Submitted → Enriched → QueuedForReview → UnderReview` and from there to
/// `Approved`, `Rejected`, or `AwaitingSubmitterAction` (which loops back to
/// `Submitted` on re-upload). `Approved` and `Rejected` are terminal for
/// this submission instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentState {
    /// Uploaded; waiting for the OCR/AI collaborator.
    Submitted,
    /// Extraction and scores attached; not yet queued.
    Enriched,
    /// Visible in a verifier queue, unclaimed or claimed but not opened.
    QueuedForReview,
    /// Claimed and opened by a verifier.
    UnderReview,
    /// Terminal: verified and issued.
    Approved,
    /// Terminal: refused.
    Rejected,
    /// Returned to the submitter for more information; re-upload restarts
    /// the cycle.
    AwaitingSubmitterAction,
}

impl DocumentState {
    /// Terminal states are retained for audit and never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Whether an enrichment callback is acceptable in this state.
    pub fn accepts_enrichment(&self) -> bool {
        matches!(self, Self::Submitted)
    }

    /// Whether the record is in the verifier review pipeline.
    pub fn in_review(&self) -> bool {
        matches!(self, Self::QueuedForReview | Self::UnderReview)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitted => "Submitted",
            Self::Enriched => "Enriched",
            Self::QueuedForReview => "Queued For Review",
            Self::UnderReview => "Under Review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::AwaitingSubmitterAction => "Awaiting Submitter Action",
        }
    }
}

impl fmt::Display for DocumentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A verifier's (or issuer's) recorded decision on an open review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DecisionKind {
    /// Approve and issue the document.
    Approved,
    /// Refuse the document.
    Rejected,
    /// Needs more information from the submitter.
    Pending,
}

impl DecisionKind {
    /// A refusal or a hold must carry a reason.
    pub fn requires_remarks(&self) -> bool {
        matches!(self, Self::Rejected | Self::Pending)
    }

    /// The state the record moves to when this decision is recorded.
    pub fn target_state(&self) -> DocumentState {
        match self {
            Self::Approved => DocumentState::Approved,
            Self::Rejected => DocumentState::Rejected,
            Self::Pending => DocumentState::AwaitingSubmitterAction,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
            Self::Pending => "Pending",
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown decision: {0:?} (expected approve, reject, or pending)")]
pub struct ParseDecisionError(String);

impl FromStr for DecisionKind {
    type Err = ParseDecisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "approve" | "approved" => Ok(Self::Approved),
            "reject" | "rejected" => Ok(Self::Rejected),
            "pending" | "needs-more-info" => Ok(Self::Pending),
            other => Err(ParseDecisionError(other.to_string())),
        }
    }
}
