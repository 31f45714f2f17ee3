//! Seam to the external account service.
//!
//! The engine consumes `login`/`register` results and trusts the returned
//! identity's role; credential handling, token issuance, and the wire
//! format belong to the service behind the trait.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use trustnet_types::{Identity, Role, UserId};

/// Authentication failures from the account service.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("account service error: {0}")]
    Provider(String),
}

/// Registration rejections from the account service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),

    #[error("password must be at least {min} characters")]
    WeakPassword { min: usize },

    #[error("an account with email {0:?} already exists")]
    EmailTaken(String),
}

/// Fields a new user submits at registration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// The account-service contract the session layer depends on.
pub trait AuthProvider {
    fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError>;
    fn register(&mut self, request: RegistrationRequest) -> Result<Identity, ValidationError>;
}

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 8;

/// One account in the directory.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl UserAccount {
    fn identity(&self) -> Identity {
        Identity::new(self.id, self.name.clone(), self.email.clone(), self.role)
    }
}

/// Reference [`AuthProvider`] backed by an in-process user directory.
///
/// Stands in for the real account service in tests and the CLI dev flow;
/// the user list is serializable so a front-end can persist it between
/// invocations.
#[derive(Default)]
pub struct DirectoryAuthProvider {
    users: Vec<UserAccount>,
}

impl DirectoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the directory from a persisted user list.
    pub fn from_users(users: Vec<UserAccount>) -> Self {
        Self { users }
    }

    /// The current user list, for persistence.
    pub fn users(&self) -> &[UserAccount] {
        &self.users
    }

    fn next_id(&self) -> UserId {
        let max = self.users.iter().map(|u| u.id.as_u64()).max().unwrap_or(0);
        UserId::new(max + 1)
    }
}

impl AuthProvider for DirectoryAuthProvider {
    fn login(&mut self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let account = self
            .users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .ok_or(AuthError::InvalidCredentials)?;
        if account.password != password {
            return Err(AuthError::InvalidCredentials);
        }
        tracing::info!(user = %account.id, role = %account.role, "login succeeded");
        Ok(account.identity())
    }

    fn register(&mut self, request: RegistrationRequest) -> Result<Identity, ValidationError> {
        if request.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let email = request.email.trim();
        if !email.contains('@') || !email.contains('.') || email.contains(char::is_whitespace) {
            return Err(ValidationError::InvalidEmail(request.email));
        }
        if request.password.len() < MIN_PASSWORD_LEN {
            return Err(ValidationError::WeakPassword {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self
            .users
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(ValidationError::EmailTaken(email.to_string()));
        }

        let account = UserAccount {
            id: self.next_id(),
            name: request.name.trim().to_string(),
            email: email.to_string(),
            password: request.password,
            role: request.role,
        };
        let identity = account.identity();
        tracing::info!(user = %identity.id, role = %identity.role, "registered new account");
        self.users.push(account);
        Ok(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> RegistrationRequest {
        RegistrationRequest {
            name: "Jane Doe".into(),
            email: email.into(),
            password: "correct horse".into(),
            role: Role::Submitter,
        }
    }

    #[test]
    fn register_then_login() {
        let mut provider = DirectoryAuthProvider::new();
        let registered = provider.register(request("jane@example.com")).unwrap();
        let logged_in = provider.login("jane@example.com", "correct horse").unwrap();
        assert_eq!(registered, logged_in);
        assert_eq!(logged_in.role, Role::Submitter);
    }

    #[test]
    fn login_is_case_insensitive_on_email() {
        let mut provider = DirectoryAuthProvider::new();
        provider.register(request("jane@example.com")).unwrap();
        assert!(provider.login("Jane@Example.COM", "correct horse").is_ok());
    }

    #[test]
    fn wrong_password_rejected() {
        let mut provider = DirectoryAuthProvider::new();
        provider.register(request("jane@example.com")).unwrap();
        assert!(matches!(
            provider.login("jane@example.com", "wrong"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn duplicate_email_rejected() {
        let mut provider = DirectoryAuthProvider::new();
        provider.register(request("jane@example.com")).unwrap();
        assert_eq!(
            provider.register(request("JANE@example.com")),
            Err(ValidationError::EmailTaken("JANE@example.com".into()))
        );
    }

    #[test]
    fn validation_failures() {
        let mut provider = DirectoryAuthProvider::new();

        let mut bad = request("jane@example.com");
        bad.name = "   ".into();
        assert_eq!(provider.register(bad), Err(ValidationError::EmptyName));

        assert!(matches!(
            provider.register(request("not-an-email")),
            Err(ValidationError::InvalidEmail(_))
        ));

        let mut weak = request("jane@example.com");
        weak.password = "short".into();
        assert_eq!(
            provider.register(weak),
            Err(ValidationError::WeakPassword { min: 8 })
        );
    }

    #[test]
    fn ids_are_sequential() {
        let mut provider = DirectoryAuthProvider::new();
        let a = provider.register(request("a@example.com")).unwrap();
        let b = provider.register(request("b@example.com")).unwrap();
        assert_eq!(b.id.as_u64(), a.id.as_u64() + 1);
    }
}
