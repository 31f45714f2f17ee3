//! The authenticated identity produced by the account service.

use crate::{Role, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An authenticated user, as returned by the external account service.
///
/// The engine treats this as opaque and trusts the `role` field; it never
/// re-derives or re-validates credentials.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> ({})", self.name, self.email, self.role)
    }
}
