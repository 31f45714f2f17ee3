//! Role-scoped queue views over document records.
//!
//! Queues are computed from record state on every call — nothing here is
//! persisted, so a record can never be in a queue its state disagrees
//! with.

use crate::record::DocumentRecord;
use std::cmp::Ordering;
use trustnet_types::{DocumentState, Identity, Priority, Role, UserId};

/// Derives the queue each role sees.
pub struct QueueManager;

impl QueueManager {
    /// The queue for `identity`, given the candidate records.
    ///
    /// - Submitter: own records, any state, most recent first.
    /// - Verifier: review-pipeline records assigned to the caller or
    ///   unassigned, priority-ordered.
    /// - Issuer: every record system-wide, priority-ordered, read-only.
    pub fn queue_for(identity: &Identity, records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        match identity.role {
            Role::Submitter => Self::submitter_queue(identity.id, records),
            Role::Verifier => Self::verifier_queue(identity.id, records),
            Role::Issuer => Self::issuer_queue(records),
        }
    }

    fn submitter_queue(owner: UserId, records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        let mut queue: Vec<_> = records.into_iter().filter(|r| r.owner == owner).collect();
        queue.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        queue
    }

    fn verifier_queue(verifier: UserId, records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        let mut queue: Vec<_> = records
            .into_iter()
            .filter(|r| r.state.in_review())
            .filter(|r| r.assigned_verifier.is_none() || r.assigned_verifier == Some(verifier))
            .collect();
        queue.sort_by(Self::review_order);
        queue
    }

    fn issuer_queue(records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        let mut queue = records;
        queue.sort_by(Self::review_order);
        queue
    }

    /// Priority first (High before Normal before Low), then oldest
    /// submission, ties broken by document id.
    fn review_order(a: &DocumentRecord, b: &DocumentRecord) -> Ordering {
        a.priority
            .cmp(&b.priority)
            .then_with(|| a.submitted_at.cmp(&b.submitted_at))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// A submitter's issued documents: own records that reached `Approved`.
    pub fn issued_for(owner: UserId, records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        Self::submitter_queue(owner, records)
            .into_iter()
            .filter(|r| r.state == DocumentState::Approved)
            .collect()
    }

    /// Records with at least one risk flag, for the fraud view.
    pub fn flagged(records: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
        let mut queue: Vec<_> = records.into_iter().filter(|r| r.is_flagged()).collect();
        queue.sort_by(Self::review_order);
        queue
    }
}

/// Counters for the dashboard stat tiles, derived from a queue snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueueStats {
    pub total: usize,
    pub queued_for_review: usize,
    pub under_review: usize,
    pub awaiting_submitter: usize,
    pub approved: usize,
    pub rejected: usize,
    pub high_priority: usize,
    pub flagged: usize,
}

impl QueueStats {
    pub fn for_records(records: &[DocumentRecord]) -> Self {
        let mut stats = Self {
            total: records.len(),
            ..Self::default()
        };
        for record in records {
            match record.state {
                DocumentState::QueuedForReview => stats.queued_for_review += 1,
                DocumentState::UnderReview => stats.under_review += 1,
                DocumentState::AwaitingSubmitterAction => stats.awaiting_submitter += 1,
                DocumentState::Approved => stats.approved += 1,
                DocumentState::Rejected => stats.rejected += 1,
                DocumentState::Submitted | DocumentState::Enriched => {}
            }
            if record.priority == Priority::High {
                stats.high_priority += 1;
            }
            if record.is_flagged() {
                stats.flagged += 1;
            }
        }
        stats
    }
}
