//! Document vocabulary: types, review priority, and file references.

use crate::fields::FieldKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The closed set of accepted identity document types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    NationalId,
    Passport,
    DriverLicense,
    BirthCertificate,
    Other,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalId => "National ID",
            Self::Passport => "Passport",
            Self::DriverLicense => "Driver License",
            Self::BirthCertificate => "Birth Certificate",
            Self::Other => "Other",
        }
    }

    /// Extracted fields that must be present for this document type.
    ///
    /// Every type requires the holder's name, date of birth, and id number.
    /// Types that carry a printed address also require it.
    pub fn required_fields(&self) -> &'static [FieldKind] {
        match self {
            Self::NationalId | Self::DriverLicense => &[
                FieldKind::FullName,
                FieldKind::DateOfBirth,
                FieldKind::IdNumber,
                FieldKind::Address,
            ],
            Self::Passport | Self::BirthCertificate | Self::Other => {
                &[FieldKind::FullName, FieldKind::DateOfBirth, FieldKind::IdNumber]
            }
        }
    }

    /// The review priority assigned to submissions of this type.
    pub fn review_priority(&self) -> Priority {
        match self {
            Self::NationalId => Priority::High,
            Self::Passport | Self::DriverLicense | Self::BirthCertificate => Priority::Normal,
            Self::Other => Priority::Low,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown document type: {0:?}")]
pub struct ParseDocumentTypeError(String);

impl FromStr for DocumentType {
    type Err = ParseDocumentTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "national-id" | "national_id" | "national id" => Ok(Self::NationalId),
            "passport" => Ok(Self::Passport),
            "driver-license" | "driver_license" | "driver license" => Ok(Self::DriverLicense),
            "birth-certificate" | "birth_certificate" | "birth certificate" => {
                Ok(Self::BirthCertificate)
            }
            "other" => Ok(Self::Other),
            other => Err(ParseDocumentTypeError(other.to_string())),
        }
    }
}

/// Review queue priority. `High` sorts before `Normal` before `Low`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Normal,
    Low,
}

impl Priority {
    /// Sort rank: lower ranks come first in review queues.
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 0,
            Self::Normal => 1,
            Self::Low => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Normal => "Normal",
            Self::Low => "Low",
        }
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to the uploaded file backing a document record.
///
/// The engine never opens the file; storage and scanning belong to the
/// upload and enrichment collaborators.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    pub file_name: String,
}

impl FileReference {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    /// Coarse kind derived from the extension, for queue display.
    pub fn kind(&self) -> FileKind {
        if self.file_name.to_ascii_lowercase().ends_with(".pdf") {
            FileKind::Pdf
        } else {
            FileKind::Image
        }
    }
}

/// What the uploaded file is, as far as queue rendering cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileKind {
    Pdf,
    Image,
}
