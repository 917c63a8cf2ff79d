//! `ledgerkit-auth` — caller identity model and the authorization gate.
//!
//! The surrounding execution environment verifies identities cryptographically;
//! this crate only decides whether an already-verified caller may perform an
//! operation, based on its issuer (MSP) and role attribute.

pub mod authorize;
pub mod identity;

pub use authorize::{AuthError, RoleRequirement, authorize};
pub use identity::{CallerIdentity, ROLE_ATTRIBUTE};
