//! Enrichment intake — attaches the OCR/AI collaborator's report.

use crate::error::WorkflowError;
use crate::record::DocumentRecord;
use trustnet_types::{DocumentState, EnrichmentReport};

/// Flag appended when the report omits fields the document type requires.
pub const MISSING_REQUIRED_FIELDS_FLAG: &str = "Missing Required Fields";

/// Applies enrichment reports to records and places them in review.
///
/// The intake consumes the collaborator's scores and flags verbatim; the
/// only thing it adds is the completeness flag, derived from the document
/// type's required-field table.
pub struct EnrichmentIntake;

impl EnrichmentIntake {
    /// Attach a report to a submitted record: `Submitted → Enriched`.
    ///
    /// Extraction and scores are overwritten wholesale (a re-submission
    /// cycle gets a fresh analysis); risk flags are unioned in.
    pub fn apply(
        &self,
        record: &mut DocumentRecord,
        report: EnrichmentReport,
    ) -> Result<(), WorkflowError> {
        if !record.state.accepts_enrichment() {
            return Err(WorkflowError::InvalidStateTransition {
                document: record.id,
                from: record.state,
                trigger: "apply enrichment",
            });
        }

        record.extracted = report.extracted;
        record.ocr_confidence = Some(report.ocr_confidence);
        record.recommendation = Some(report.recommendation);
        record.ai_confidence = Some(report.ai_confidence);
        record.add_risk_flags(report.risk_flags);

        if !record
            .extracted
            .missing(record.document_type.required_fields())
            .is_empty()
        {
            record.add_risk_flags([MISSING_REQUIRED_FIELDS_FLAG]);
        }

        record.state = DocumentState::Enriched;
        Ok(())
    }

    /// Move an enriched record into the verifier queue:
    /// `Enriched → QueuedForReview`. Requires a recommendation.
    pub fn place_in_queue(&self, record: &mut DocumentRecord) -> Result<(), WorkflowError> {
        if record.state != DocumentState::Enriched || record.recommendation.is_none() {
            return Err(WorkflowError::InvalidStateTransition {
                document: record.id,
                from: record.state,
                trigger: "place in review queue",
            });
        }
        record.state = DocumentState::QueuedForReview;
        Ok(())
    }
}
