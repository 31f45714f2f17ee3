//! The closed set of navigable views and their role classes.

use serde::{Deserialize, Serialize};
use std::fmt;
use trustnet_types::Role;

/// Every view the client can request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    // Public
    Landing,
    Register,
    Contact,
    PrivacyPolicy,
    // Submitter
    SubmitterDashboard,
    DocumentUpload,
    VerificationResult,
    IssuedDocuments,
    ProfileDetails,
    // Verifier
    VerifierDashboard,
    DocumentReview,
    // Issuer
    IssuerDashboard,
    FraudDetection,
}

impl View {
    /// Which role class this view belongs to.
    pub fn class(&self) -> ViewClass {
        match self {
            Self::Landing | Self::Register | Self::Contact | Self::PrivacyPolicy => {
                ViewClass::Public
            }
            Self::SubmitterDashboard
            | Self::DocumentUpload
            | Self::VerificationResult
            | Self::IssuedDocuments
            | Self::ProfileDetails => ViewClass::Submitter,
            Self::VerifierDashboard | Self::DocumentReview => ViewClass::Verifier,
            Self::IssuerDashboard | Self::FraudDetection => ViewClass::Issuer,
        }
    }

    /// The home view a role lands on after sign-in (and is redirected to
    /// when it requests a view outside its class).
    pub fn home_for(role: Role) -> View {
        match role {
            Role::Submitter => View::SubmitterDashboard,
            Role::Verifier => View::VerifierDashboard,
            Role::Issuer => View::IssuerDashboard,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Landing => "landing",
            Self::Register => "register",
            Self::Contact => "contact",
            Self::PrivacyPolicy => "privacy-policy",
            Self::SubmitterDashboard => "submitter-dashboard",
            Self::DocumentUpload => "document-upload",
            Self::VerificationResult => "verification-result",
            Self::IssuedDocuments => "issued-documents",
            Self::ProfileDetails => "profile-details",
            Self::VerifierDashboard => "verifier-dashboard",
            Self::DocumentReview => "document-review",
            Self::IssuerDashboard => "issuer-dashboard",
            Self::FraudDetection => "fraud-detection",
        };
        f.write_str(name)
    }
}

/// Role partition of the view set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewClass {
    Public,
    Submitter,
    Verifier,
    Issuer,
}

impl ViewClass {
    /// Whether `role` may open views of this class.
    ///
    /// Each role is strictly scoped to its own class plus public views;
    /// issuer is deliberately not a superset of the other roles.
    pub fn admits(&self, role: Role) -> bool {
        match self {
            Self::Public => true,
            Self::Submitter => role == Role::Submitter,
            Self::Verifier => role == Role::Verifier,
            Self::Issuer => role == Role::Issuer,
        }
    }
}
