//! Workflow engine — the single mutation surface over document records.
//!
//! Wires the enrichment intake, decision processor, and queue views to a
//! [`DocumentStore`]. Every operation takes the caller's identity
//! explicitly; nothing here reads ambient session state. Mutations are
//! validated on a loaded copy and persisted with one store write, so a
//! failed call never leaves a half-updated record, and the queue index
//! migrates in the same write.

use crate::decision::DecisionProcessor;
use crate::enrichment::EnrichmentIntake;
use crate::error::WorkflowError;
use crate::queue::{QueueManager, QueueStats};
use crate::record::DocumentRecord;
use crate::report;
use trustnet_store::DocumentStore;
use trustnet_types::{
    DecisionKind, DocumentId, DocumentType, EnrichmentReport, FileReference, Identity, Priority,
    QueueKey, Role, Timestamp, UserId,
};

/// What a submitter provides when uploading a document.
#[derive(Clone, Debug)]
pub struct SubmitRequest {
    pub document_type: DocumentType,
    pub file: FileReference,
}

/// Events emitted by the engine for the view layer to process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WorkflowEvent {
    DocumentSubmitted {
        document: DocumentId,
        owner: UserId,
    },
    DocumentEnriched {
        document: DocumentId,
    },
    DocumentQueued {
        document: DocumentId,
        priority: Priority,
    },
    ReviewStarted {
        document: DocumentId,
        verifier: UserId,
    },
    DecisionRecorded {
        document: DocumentId,
        decision: DecisionKind,
    },
    DocumentResubmitted {
        document: DocumentId,
    },
}

/// The verification workflow engine.
pub struct WorkflowEngine<S: DocumentStore> {
    store: S,
    intake: EnrichmentIntake,
    decisions: DecisionProcessor,
    next_id: DocumentId,
    pending_events: Vec<WorkflowEvent>,
}

impl<S: DocumentStore> WorkflowEngine<S> {
    /// Open the engine over a store, seeding the id allocator from the
    /// highest stored id.
    pub fn new(store: S) -> Result<Self, WorkflowError> {
        let next_id = store
            .max_id()?
            .map(|id| id.next())
            .unwrap_or_else(|| DocumentId::new(1));
        Ok(Self {
            store,
            intake: EnrichmentIntake,
            decisions: DecisionProcessor,
            next_id,
            pending_events: Vec::new(),
        })
    }

    /// Create a record for an uploaded document. Submitters only.
    pub fn submit(
        &mut self,
        caller: &Identity,
        request: SubmitRequest,
    ) -> Result<DocumentRecord, WorkflowError> {
        if caller.role != Role::Submitter {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "submit a document",
            });
        }

        let id = self.next_id;
        self.next_id = id.next();
        let mut record = DocumentRecord::new(
            id,
            caller,
            request.document_type,
            request.file,
            Timestamp::now(),
        );
        self.persist(&mut record)?;
        tracing::info!(document = %id, owner = %caller.id, kind = %request.document_type, "document submitted");
        self.pending_events.push(WorkflowEvent::DocumentSubmitted {
            document: id,
            owner: caller.id,
        });
        Ok(record)
    }

    /// Accept an enrichment report from the OCR/AI collaborator.
    ///
    /// The callback may arrive at any time; a report for a record past
    /// `Submitted` is refused and logged, never a crash. On success the
    /// record is enriched and placed straight into the review queue (the
    /// report always carries a recommendation).
    pub fn handle_enrichment(
        &mut self,
        report: EnrichmentReport,
    ) -> Result<DocumentRecord, WorkflowError> {
        let mut record = self.load(report.document_id)?;

        if !record.state.accepts_enrichment() {
            tracing::warn!(
                document = %record.id,
                state = %record.state,
                "dropping enrichment report for record past submission"
            );
            return Err(WorkflowError::InvalidStateTransition {
                document: record.id,
                from: record.state,
                trigger: "apply enrichment",
            });
        }

        self.intake.apply(&mut record, report)?;
        self.intake.place_in_queue(&mut record)?;
        self.persist(&mut record)?;

        tracing::info!(document = %record.id, priority = %record.priority, "document enriched and queued");
        self.pending_events.push(WorkflowEvent::DocumentEnriched {
            document: record.id,
        });
        self.pending_events.push(WorkflowEvent::DocumentQueued {
            document: record.id,
            priority: record.priority,
        });
        Ok(record)
    }

    /// Claim a queued record for review. Verifiers only.
    pub fn open_for_review(
        &mut self,
        id: DocumentId,
        caller: &Identity,
    ) -> Result<DocumentRecord, WorkflowError> {
        let mut record = self.load(id)?;
        self.decisions.open_for_review(&mut record, caller)?;
        self.persist(&mut record)?;

        tracing::info!(document = %id, verifier = %caller.id, "review started");
        self.pending_events.push(WorkflowEvent::ReviewStarted {
            document: id,
            verifier: caller.id,
        });
        Ok(record)
    }

    /// Record a decision on an open review.
    ///
    /// `expected_version` is the version the caller observed when it
    /// loaded the record; a mismatch fails with `Conflict`. State,
    /// decision, remarks, and timestamp land in one store write, which
    /// also moves the record out of the review queue.
    pub fn submit_decision(
        &mut self,
        id: DocumentId,
        caller: &Identity,
        decision: DecisionKind,
        remarks: &str,
        expected_version: u64,
    ) -> Result<DocumentRecord, WorkflowError> {
        let mut record = self.load(id)?;
        self.decisions.submit_decision(
            &mut record,
            caller,
            decision,
            remarks,
            expected_version,
            Timestamp::now(),
        )?;
        self.persist(&mut record)?;

        tracing::info!(document = %id, decision = %decision, by = %caller.id, "decision recorded");
        self.pending_events.push(WorkflowEvent::DecisionRecorded {
            document: id,
            decision,
        });
        Ok(record)
    }

    /// Re-upload after a `Pending` decision: back to `Submitted`.
    ///
    /// Owner only. Clears the previous cycle's decision and verifier
    /// assignment; risk flags are retained for audit.
    pub fn resubmit(
        &mut self,
        id: DocumentId,
        caller: &Identity,
        file: FileReference,
    ) -> Result<DocumentRecord, WorkflowError> {
        let mut record = self.load(id)?;
        if caller.role != Role::Submitter || record.owner != caller.id {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "re-submit this document",
            });
        }
        if record.state != trustnet_types::DocumentState::AwaitingSubmitterAction {
            return Err(WorkflowError::InvalidStateTransition {
                document: record.id,
                from: record.state,
                trigger: "re-submit",
            });
        }

        record.file = file;
        record.submitted_at = Timestamp::now();
        record.state = trustnet_types::DocumentState::Submitted;
        record.assigned_verifier = None;
        record.decision = None;
        record.decision_remarks = None;
        record.decided_at = None;
        self.persist(&mut record)?;

        tracing::info!(document = %id, owner = %caller.id, "document re-submitted");
        self.pending_events
            .push(WorkflowEvent::DocumentResubmitted { document: id });
        Ok(record)
    }

    /// The caller's role-scoped queue.
    pub fn queue_for(&self, caller: &Identity) -> Result<Vec<DocumentRecord>, WorkflowError> {
        let candidates = match caller.role {
            // Verifiers only ever see the review pipeline.
            Role::Verifier => self.decode_all(self.store.list_by_queue(QueueKey::Review)?)?,
            Role::Submitter | Role::Issuer => self.decode_all(self.store.list_all()?)?,
        };
        Ok(QueueManager::queue_for(caller, candidates))
    }

    /// Dashboard counters over the caller's queue.
    pub fn queue_stats(&self, caller: &Identity) -> Result<QueueStats, WorkflowError> {
        Ok(QueueStats::for_records(&self.queue_for(caller)?))
    }

    /// A submitter's approved (issued) documents.
    pub fn issued_documents(
        &self,
        caller: &Identity,
    ) -> Result<Vec<DocumentRecord>, WorkflowError> {
        if caller.role != Role::Submitter {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "list issued documents",
            });
        }
        let records = self.decode_all(self.store.list_all()?)?;
        Ok(QueueManager::issued_for(caller.id, records))
    }

    /// Flagged records system-wide. Issuers only.
    pub fn flagged_documents(
        &self,
        caller: &Identity,
    ) -> Result<Vec<DocumentRecord>, WorkflowError> {
        if caller.role != Role::Issuer {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "view flagged documents",
            });
        }
        let records = self.decode_all(self.store.list_all()?)?;
        Ok(QueueManager::flagged(records))
    }

    /// The system-wide CSV report. Issuers only.
    pub fn csv_report(&self, caller: &Identity) -> Result<String, WorkflowError> {
        if caller.role != Role::Issuer {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "export the document report",
            });
        }
        let records = self.decode_all(self.store.list_all()?)?;
        Ok(report::csv_report(&records))
    }

    /// Load one record, visibility-guarded per role: submitters see their
    /// own, verifiers see the review pipeline and their past claims,
    /// issuers see everything.
    pub fn document(
        &self,
        id: DocumentId,
        caller: &Identity,
    ) -> Result<DocumentRecord, WorkflowError> {
        let record = self.load(id)?;
        let visible = match caller.role {
            Role::Submitter => record.owner == caller.id,
            Role::Verifier => {
                record.state.in_review() || record.assigned_verifier == Some(caller.id)
            }
            Role::Issuer => true,
        };
        if !visible {
            return Err(WorkflowError::Unauthorized {
                actor: caller.id,
                action: "view this document",
            });
        }
        Ok(record)
    }

    /// Drain events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<WorkflowEvent> {
        std::mem::take(&mut self.pending_events)
    }

    fn load(&self, id: DocumentId) -> Result<DocumentRecord, WorkflowError> {
        let blob = self
            .store
            .get(id)?
            .ok_or(WorkflowError::RecordNotFound(id))?;
        DocumentRecord::from_bytes(&blob)
    }

    fn persist(&self, record: &mut DocumentRecord) -> Result<(), WorkflowError> {
        record.version += 1;
        let bytes = record.to_bytes()?;
        self.store.put(record.id, record.queue_key(), &bytes)?;
        Ok(())
    }

    fn decode_all(&self, blobs: Vec<Vec<u8>>) -> Result<Vec<DocumentRecord>, WorkflowError> {
        blobs
            .iter()
            .map(|blob| DocumentRecord::from_bytes(blob))
            .collect()
    }
}
