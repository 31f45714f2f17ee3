//! Session and authorization layer.
//!
//! Holds the one authenticated [`Identity`](trustnet_types::Identity) for
//! the life of the client process, decides which views each role may open,
//! and defines the seam to the external account service.
//!
//! Authorization here is view-level gating only; object-level guards
//! (ownership, claim, state adjacency) live in the workflow crate.

pub mod auth;
pub mod guard;
pub mod store;
pub mod view;

pub use auth::{AuthError, AuthProvider, DirectoryAuthProvider, RegistrationRequest, ValidationError};
pub use guard::{authorize, AccessDecision};
pub use store::SessionStore;
pub use view::{View, ViewClass};
