//! Process-wide session state.

use std::sync::RwLock;
use trustnet_types::Identity;

/// Holds the currently authenticated identity, login to logout.
///
/// At most one identity is active at a time; signing in replaces the old
/// one wholesale. Readers clone the identity out, so no caller ever holds
/// the lock across other work.
#[derive(Default)]
pub struct SessionStore {
    current: RwLock<Option<Identity>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing identity with `identity`.
    pub fn sign_in(&self, identity: Identity) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        if let Some(previous) = current.take() {
            tracing::debug!(user = %previous.id, "discarding previous session");
        }
        tracing::info!(user = %identity.id, role = %identity.role, "signed in");
        *current = Some(identity);
    }

    /// The active identity, or `None` when signed out.
    pub fn current_identity(&self) -> Option<Identity> {
        self.current
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Clear the session. Idempotent.
    pub fn sign_out(&self) {
        let mut current = self.current.write().unwrap_or_else(|e| e.into_inner());
        if let Some(identity) = current.take() {
            tracing::info!(user = %identity.id, "signed out");
        }
    }
}
