//! The payload delivered by the OCR/AI enrichment collaborator.

use crate::{DocumentId, ExtractedFields};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A confidence percentage in `0..=100`, clamped on construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Confidence(u8);

impl Confidence {
    pub fn new(percent: u8) -> Self {
        Self(percent.min(100))
    }

    pub fn percent(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// The AI analyzer's recommendation for a document.
///
/// Advisory only — the human decision in
/// [`DecisionKind`](crate::DecisionKind) is what moves the record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiRecommendation {
    Approve,
    Reject,
    ReviewRequired,
}

impl AiRecommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "Approve",
            Self::Reject => "Reject",
            Self::ReviewRequired => "Review Required",
        }
    }
}

impl fmt::Display for AiRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown recommendation: {0:?}")]
pub struct ParseRecommendationError(String);

impl FromStr for AiRecommendation {
    type Err = ParseRecommendationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "approve" => Ok(Self::Approve),
            "reject" => Ok(Self::Reject),
            "review-required" | "review_required" | "review required" => Ok(Self::ReviewRequired),
            other => Err(ParseRecommendationError(other.to_string())),
        }
    }
}

/// Everything the enrichment service reports for one document.
///
/// Arrives asynchronously, keyed by document id. The engine consumes this
/// verbatim; it never computes scores or recommendations of its own.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnrichmentReport {
    pub document_id: DocumentId,
    pub extracted: ExtractedFields,
    pub ocr_confidence: Confidence,
    pub recommendation: AiRecommendation,
    pub ai_confidence: Confidence,
    /// Risk flags raised by the analyzer, e.g. "Low OCR Confidence".
    pub risk_flags: Vec<String>,
}
