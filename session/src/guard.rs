//! View-level access policy.

use crate::view::{View, ViewClass};
use trustnet_types::Identity;

/// The guard's verdict on a view request.
///
/// The guard never navigates; callers perform the redirect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectTo(View),
}

/// Decide whether `identity` may open `requested`.
///
/// Pure and side-effect-free: anonymous callers are sent to the public
/// landing for any non-public view, and an authenticated caller requesting
/// a view outside its role class is sent to its own home.
pub fn authorize(identity: Option<&Identity>, requested: View) -> AccessDecision {
    let class = requested.class();
    match identity {
        None => {
            if class == ViewClass::Public {
                AccessDecision::Allow
            } else {
                AccessDecision::RedirectTo(View::Landing)
            }
        }
        Some(identity) => {
            if class.admits(identity.role) {
                AccessDecision::Allow
            } else {
                AccessDecision::RedirectTo(View::home_for(identity.role))
            }
        }
    }
}
