//! Fields extracted from a document by the OCR collaborator.

use serde::{Deserialize, Serialize};

/// The set of fields OCR can extract from an identity document.
///
/// Every field is optional here; which ones a given submission must carry
/// is decided by [`DocumentType::required_fields`](crate::DocumentType::required_fields).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub full_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub id_number: Option<String>,
    pub issued_date: Option<String>,
    pub expiry_date: Option<String>,
    pub address: Option<String>,
    pub nationality: Option<String>,
}

impl ExtractedFields {
    /// Read a field by kind. Empty strings count as absent.
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        let value = match kind {
            FieldKind::FullName => &self.full_name,
            FieldKind::DateOfBirth => &self.date_of_birth,
            FieldKind::IdNumber => &self.id_number,
            FieldKind::IssuedDate => &self.issued_date,
            FieldKind::ExpiryDate => &self.expiry_date,
            FieldKind::Address => &self.address,
            FieldKind::Nationality => &self.nationality,
        };
        value.as_deref().filter(|v| !v.trim().is_empty())
    }

    /// Which of `required` are missing from this extraction.
    pub fn missing(&self, required: &[FieldKind]) -> Vec<FieldKind> {
        required
            .iter()
            .copied()
            .filter(|kind| self.get(*kind).is_none())
            .collect()
    }
}

/// Names of the extractable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    FullName,
    DateOfBirth,
    IdNumber,
    IssuedDate,
    ExpiryDate,
    Address,
    Nationality,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullName => "full name",
            Self::DateOfBirth => "date of birth",
            Self::IdNumber => "id number",
            Self::IssuedDate => "issued date",
            Self::ExpiryDate => "expiry date",
            Self::Address => "address",
            Self::Nationality => "nationality",
        }
    }
}
