//! Verified caller identity descriptor.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attribute name carrying the caller's role claim.
pub const ROLE_ATTRIBUTE: &str = "role";

/// An authenticated caller, as supplied by the execution environment.
///
/// Construction is decoupled from transport: the dispatcher extracts the
/// issuer, identity string and credential attributes from the verified
/// submission and hands them over as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Identifier of the issuing MSP (the organizational identity provider).
    pub msp_id: String,

    /// Full identity string of the caller (e.g. an x509 subject chain).
    pub id: String,

    /// Attributes attached to the caller's credential.
    #[serde(default)]
    pub attributes: HashMap<String, String>,
}

impl CallerIdentity {
    pub fn new(msp_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            msp_id: msp_id.into(),
            id: id.into(),
            attributes: HashMap::new(),
        }
    }

    /// Attach a credential attribute (builder style, used heavily in tests).
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Convenience builder for the common case.
    pub fn with_role(self, role: impl Into<String>) -> Self {
        self.with_attribute(ROLE_ATTRIBUTE, role)
    }

    /// The caller's role claim, if the credential carries one.
    pub fn role(&self) -> Option<&str> {
        self.attributes.get(ROLE_ATTRIBUTE).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_reads_the_role_attribute() {
        let identity = CallerIdentity::new("Org2MSP", "x509::CN=alice").with_role("govUser");
        assert_eq!(identity.role(), Some("govUser"));
    }

    #[test]
    fn role_is_absent_without_the_attribute() {
        let identity = CallerIdentity::new("Org2MSP", "x509::CN=alice")
            .with_attribute("department", "treasury");
        assert_eq!(identity.role(), None);
    }
}
