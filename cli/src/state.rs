//! Persisted CLI state: the signed-in session and the user directory.
//!
//! A CLI invocation is a short-lived process, so the login-to-logout
//! session lifecycle spans invocations via a small JSON file in the data
//! directory. The user directory backing the reference auth provider
//! persists the same way.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use trustnet_session::auth::UserAccount;
use trustnet_types::Identity;

#[derive(Debug, Default, Serialize, Deserialize)]
struct SessionFile {
    identity: Option<Identity>,
}

/// Load the persisted session, if any.
pub fn load_session(path: &Path) -> Result<Option<Identity>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading session file {}", path.display()))?;
    let file: SessionFile = serde_json::from_str(&contents)
        .with_context(|| format!("parsing session file {}", path.display()))?;
    Ok(file.identity)
}

/// Persist (or clear) the session.
pub fn save_session(path: &Path, identity: Option<&Identity>) -> Result<()> {
    let file = SessionFile {
        identity: identity.cloned(),
    };
    let contents = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, contents)
        .with_context(|| format!("writing session file {}", path.display()))?;
    Ok(())
}

/// Load the persisted user directory.
pub fn load_users(path: &Path) -> Result<Vec<UserAccount>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading user directory {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parsing user directory {}", path.display()))
}

/// Persist the user directory.
pub fn save_users(path: &Path, users: &[UserAccount]) -> Result<()> {
    let contents = serde_json::to_string_pretty(users)?;
    std::fs::write(path, contents)
        .with_context(|| format!("writing user directory {}", path.display()))?;
    Ok(())
}
