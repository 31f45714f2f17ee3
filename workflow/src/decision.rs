//! Decision processing — claiming a record and adjudicating it.

use crate::error::WorkflowError;
use crate::record::DocumentRecord;
use trustnet_types::{DecisionKind, DocumentState, Identity, Role, Timestamp};

/// Applies verifier/issuer decisions to records.
///
/// All checks run before any field is touched, so a failed call leaves
/// the record exactly as it was.
pub struct DecisionProcessor;

impl DecisionProcessor {
    /// Claim a queued record for review: `QueuedForReview → UnderReview`.
    ///
    /// Only verifiers open records, and only unclaimed records or ones
    /// already claimed by the caller. Claiming marks the record so no
    /// second verifier can hold it concurrently.
    pub fn open_for_review(
        &self,
        record: &mut DocumentRecord,
        caller: &Identity,
    ) -> Result<(), WorkflowError> {
        if caller.role != Role::Verifier {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "open a record for review",
            });
        }
        if record.state != DocumentState::QueuedForReview {
            return Err(WorkflowError::InvalidStateTransition {
                document: record.id,
                from: record.state,
                trigger: "open for review",
            });
        }
        if record.assigned_verifier.is_some_and(|v| v != caller.id) {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "open a record claimed by another verifier",
            });
        }

        record.assigned_verifier = Some(caller.id);
        record.state = DocumentState::UnderReview;
        Ok(())
    }

    /// Record a decision on an open review.
    ///
    /// `expected_version` is the record version the caller observed; a
    /// mismatch means someone else got there first and the request fails
    /// with [`Conflict`](WorkflowError::Conflict) before anything else is
    /// checked — a retried identical request after success therefore sees
    /// `Conflict`, never a duplicate state change.
    pub fn submit_decision(
        &self,
        record: &mut DocumentRecord,
        caller: &Identity,
        decision: DecisionKind,
        remarks: &str,
        expected_version: u64,
        now: Timestamp,
    ) -> Result<(), WorkflowError> {
        if record.version != expected_version {
            return Err(WorkflowError::Conflict {
                document: record.id,
                expected: expected_version,
                current: record.version,
            });
        }
        if record.state != DocumentState::UnderReview {
            return Err(WorkflowError::InvalidStateTransition {
                document: record.id,
                from: record.state,
                trigger: "record a decision",
            });
        }
        if !matches!(caller.role, Role::Verifier | Role::Issuer) {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "record a decision",
            });
        }
        let remarks = remarks.trim();
        if decision.requires_remarks() && remarks.is_empty() {
            return Err(WorkflowError::MissingRemarks { decision });
        }

        // State, decision, remarks, and timestamp move together.
        record.state = decision.target_state();
        record.decision = Some(decision);
        record.decision_remarks = (!remarks.is_empty()).then(|| remarks.to_string());
        record.decided_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustnet_types::{DocumentId, DocumentType, FileReference, UserId};

    fn identity(id: u64, role: Role) -> Identity {
        Identity::new(UserId::new(id), "Test User", "test@example.com", role)
    }

    fn queued_record() -> DocumentRecord {
        let submitter = identity(101, Role::Submitter);
        let mut record = DocumentRecord::new(
            DocumentId::new(1),
            &submitter,
            DocumentType::Passport,
            FileReference::new("passport_scan.pdf"),
            Timestamp::new(1_000),
        );
        record.state = DocumentState::QueuedForReview;
        record
    }

    fn open_record(verifier: &Identity) -> DocumentRecord {
        let mut record = queued_record();
        DecisionProcessor.open_for_review(&mut record, verifier).unwrap();
        record
    }

    // -- open_for_review --

    #[test]
    fn verifier_claims_unassigned_record() {
        let verifier = identity(201, Role::Verifier);
        let mut record = queued_record();
        DecisionProcessor.open_for_review(&mut record, &verifier).unwrap();

        assert_eq!(record.state, DocumentState::UnderReview);
        assert_eq!(record.assigned_verifier, Some(verifier.id));
    }

    #[test]
    fn issuer_cannot_open() {
        let issuer = identity(301, Role::Issuer);
        let mut record = queued_record();
        assert!(matches!(
            DecisionProcessor.open_for_review(&mut record, &issuer),
            Err(WorkflowError::Unauthorized { .. })
        ));
        assert_eq!(record.state, DocumentState::QueuedForReview);
    }

    #[test]
    fn other_verifiers_claim_is_respected() {
        let first = identity(201, Role::Verifier);
        let second = identity(202, Role::Verifier);
        let mut record = queued_record();
        record.assigned_verifier = Some(first.id);

        assert!(matches!(
            DecisionProcessor.open_for_review(&mut record, &second),
            Err(WorkflowError::Unauthorized { .. })
        ));
        // The claiming verifier may still open it.
        DecisionProcessor.open_for_review(&mut record, &first).unwrap();
    }

    #[test]
    fn open_from_wrong_state_fails() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        assert!(matches!(
            DecisionProcessor.open_for_review(&mut record, &verifier),
            Err(WorkflowError::InvalidStateTransition { .. })
        ));
    }

    // -- submit_decision --

    #[test]
    fn approve_moves_to_terminal() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        let version = record.version;

        DecisionProcessor
            .submit_decision(
                &mut record,
                &verifier,
                DecisionKind::Approved,
                "ok",
                version,
                Timestamp::new(2_000),
            )
            .unwrap();

        assert_eq!(record.state, DocumentState::Approved);
        assert_eq!(record.decision, Some(DecisionKind::Approved));
        assert_eq!(record.decided_at, Some(Timestamp::new(2_000)));
        assert_eq!(record.decision_remarks.as_deref(), Some("ok"));
    }

    #[test]
    fn pending_returns_to_submitter_not_terminal() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        let version = record.version;

        DecisionProcessor
            .submit_decision(
                &mut record,
                &verifier,
                DecisionKind::Pending,
                "photo is illegible, please re-scan",
                version,
                Timestamp::new(2_000),
            )
            .unwrap();

        assert_eq!(record.state, DocumentState::AwaitingSubmitterAction);
        assert!(!record.state.is_terminal());
    }

    #[test]
    fn rejection_without_remarks_refused() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        let version = record.version;

        let result = DecisionProcessor.submit_decision(
            &mut record,
            &verifier,
            DecisionKind::Rejected,
            "   ",
            version,
            Timestamp::new(2_000),
        );
        assert!(matches!(result, Err(WorkflowError::MissingRemarks { .. })));
        assert_eq!(record.state, DocumentState::UnderReview);
        assert!(record.decision.is_none());
    }

    #[test]
    fn approval_remarks_optional() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        let version = record.version;

        DecisionProcessor
            .submit_decision(
                &mut record,
                &verifier,
                DecisionKind::Approved,
                "",
                version,
                Timestamp::new(2_000),
            )
            .unwrap();
        assert_eq!(record.decision_remarks, None);
    }

    #[test]
    fn issuer_may_decide() {
        let verifier = identity(201, Role::Verifier);
        let issuer = identity(301, Role::Issuer);
        let mut record = open_record(&verifier);
        let version = record.version;

        DecisionProcessor
            .submit_decision(
                &mut record,
                &issuer,
                DecisionKind::Rejected,
                "document expired",
                version,
                Timestamp::new(2_000),
            )
            .unwrap();
        assert_eq!(record.state, DocumentState::Rejected);
    }

    #[test]
    fn submitter_cannot_decide() {
        let verifier = identity(201, Role::Verifier);
        let submitter = identity(101, Role::Submitter);
        let mut record = open_record(&verifier);
        let version = record.version;

        assert!(matches!(
            DecisionProcessor.submit_decision(
                &mut record,
                &submitter,
                DecisionKind::Approved,
                "self-approval",
                version,
                Timestamp::new(2_000),
            ),
            Err(WorkflowError::Unauthorized { .. })
        ));
    }

    #[test]
    fn stale_version_conflicts_before_anything_else() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        let stale = record.version + 1;

        let result = DecisionProcessor.submit_decision(
            &mut record,
            &verifier,
            DecisionKind::Approved,
            "ok",
            stale,
            Timestamp::new(2_000),
        );
        assert!(matches!(result, Err(WorkflowError::Conflict { .. })));
        assert_eq!(record.state, DocumentState::UnderReview);
    }

    #[test]
    fn decision_does_not_clear_risk_flags() {
        let verifier = identity(201, Role::Verifier);
        let mut record = open_record(&verifier);
        record.add_risk_flags(["Data Format Inconsistency"]);
        let version = record.version;

        DecisionProcessor
            .submit_decision(
                &mut record,
                &verifier,
                DecisionKind::Rejected,
                "inconsistent data",
                version,
                Timestamp::new(2_000),
            )
            .unwrap();
        assert!(record.risk_flags.contains("Data Format Inconsistency"));
    }
}
