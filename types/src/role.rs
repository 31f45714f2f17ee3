//! The closed set of actor roles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which side of the verification workflow an identity acts on.
///
/// Roles are strictly scoped: an issuer is *not* a superset of a verifier
/// or submitter. Authorization decisions dispatch on this enum, never on
/// string comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// End user who uploads identity documents for verification.
    Submitter,
    /// Reviews queued documents and records Approve/Reject/Pending decisions.
    Verifier,
    /// System-wide aggregate visibility over all documents.
    Issuer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Submitter => "submitter",
            Self::Verifier => "verifier",
            Self::Issuer => "issuer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown role: {0:?} (expected submitter, verifier, or issuer)")]
pub struct ParseRoleError(String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "submitter" | "user" => Ok(Self::Submitter),
            "verifier" => Ok(Self::Verifier),
            "issuer" => Ok(Self::Issuer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_roles() {
        assert_eq!("submitter".parse::<Role>().unwrap(), Role::Submitter);
        assert_eq!("Verifier".parse::<Role>().unwrap(), Role::Verifier);
        assert_eq!("ISSUER".parse::<Role>().unwrap(), Role::Issuer);
        // Legacy alias from the account service.
        assert_eq!("user".parse::<Role>().unwrap(), Role::Submitter);
    }

    #[test]
    fn rejects_unknown_role() {
        assert!("admin".parse::<Role>().is_err());
    }

    #[test]
    fn round_trips_through_as_str() {
        for role in [Role::Submitter, Role::Verifier, Role::Issuer] {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }
}
