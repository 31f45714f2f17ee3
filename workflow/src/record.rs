//! The document record — one submission and its evolving state.

use crate::error::WorkflowError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use trustnet_store::StoreError;
use trustnet_types::{
    AiRecommendation, Confidence, DecisionKind, DocumentId, DocumentState, DocumentType,
    ExtractedFields, FileReference, Identity, Priority, QueueKey, Timestamp, UserId,
};

/// One submitted identity document and its verification state.
///
/// Mutated only by the enrichment intake and the decision processor;
/// views read it, they never write it. Queue membership is always
/// [`queue_key`](Self::queue_key), derived, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: DocumentId,
    pub owner: UserId,
    /// Submitter display details, denormalized for queue rendering.
    pub owner_name: String,
    pub owner_email: String,
    pub document_type: DocumentType,
    pub file: FileReference,
    pub submitted_at: Timestamp,
    pub priority: Priority,
    pub extracted: ExtractedFields,
    pub ocr_confidence: Option<Confidence>,
    pub recommendation: Option<AiRecommendation>,
    pub ai_confidence: Option<Confidence>,
    /// Append-only while the record is in the review pipeline; a decision
    /// never clears these.
    pub risk_flags: BTreeSet<String>,
    pub state: DocumentState,
    pub assigned_verifier: Option<UserId>,
    pub decision: Option<DecisionKind>,
    pub decision_remarks: Option<String>,
    pub decided_at: Option<Timestamp>,
    /// Bumped on every persisted mutation; the compare-and-set token for
    /// concurrent decision requests.
    pub version: u64,
}

impl DocumentRecord {
    /// A fresh record in `Submitted`, priced into its review priority by
    /// document type.
    pub fn new(
        id: DocumentId,
        owner: &Identity,
        document_type: DocumentType,
        file: FileReference,
        now: Timestamp,
    ) -> Self {
        Self {
            id,
            owner: owner.id,
            owner_name: owner.name.clone(),
            owner_email: owner.email.clone(),
            document_type,
            file,
            submitted_at: now,
            priority: document_type.review_priority(),
            extracted: ExtractedFields::default(),
            ocr_confidence: None,
            recommendation: None,
            ai_confidence: None,
            risk_flags: BTreeSet::new(),
            state: DocumentState::Submitted,
            assigned_verifier: None,
            decision: None,
            decision_remarks: None,
            decided_at: None,
            version: 0,
        }
    }

    /// The queue this record currently belongs to.
    pub fn queue_key(&self) -> QueueKey {
        QueueKey::for_state(self.state)
    }

    /// Whether any risk flag has been raised against this record.
    pub fn is_flagged(&self) -> bool {
        !self.risk_flags.is_empty()
    }

    /// Union new flags into the set (append-only semantics).
    pub fn add_risk_flags<I, S>(&mut self, flags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for flag in flags {
            let flag = flag.into();
            if !flag.trim().is_empty() {
                self.risk_flags.insert(flag);
            }
        }
    }

    /// Serialize for the store.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WorkflowError> {
        bincode::serialize(self)
            .map_err(|e| WorkflowError::Store(StoreError::Serialization(e.to_string())))
    }

    /// Deserialize a stored blob.
    pub fn from_bytes(data: &[u8]) -> Result<Self, WorkflowError> {
        bincode::deserialize(data)
            .map_err(|e| WorkflowError::Store(StoreError::Serialization(e.to_string())))
    }
}
