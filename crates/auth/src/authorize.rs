//! Attribute-based authorization gate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::identity::CallerIdentity;

/// Policy for a gated operation: which issuers may call it, and with which
/// role claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub allowed_msps: Vec<String>,
    pub role: String,
}

impl RoleRequirement {
    pub fn new<I, S>(allowed_msps: I, role: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_msps: allowed_msps.into_iter().map(Into::into).collect(),
            role: role.into(),
        }
    }
}

/// Authorization failure. The message always names the dimension that
/// actually failed, with actual vs required values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("caller from '{msp_id}' is not authorized (allowed issuers: {allowed:?})")]
    MspNotAllowed { msp_id: String, allowed: Vec<String> },

    #[error("caller from '{msp_id}' with role '{actual}' is not authorized (required role: '{required}')")]
    RoleMismatch {
        msp_id: String,
        actual: String,
        required: String,
    },
}

/// Check a caller against a role requirement.
///
/// Issuer membership is checked first, then role claim equality, so the
/// error always reports the failing dimension. A missing role claim is
/// reported as `'unknown'`.
///
/// - No I/O
/// - No panics
/// - Pure policy check
pub fn authorize(identity: &CallerIdentity, required: &RoleRequirement) -> Result<(), AuthError> {
    if !required.allowed_msps.iter().any(|m| m == &identity.msp_id) {
        tracing::warn!(
            msp_id = %identity.msp_id,
            "authorization denied: issuer not in allowed set"
        );
        return Err(AuthError::MspNotAllowed {
            msp_id: identity.msp_id.clone(),
            allowed: required.allowed_msps.clone(),
        });
    }

    if identity.role() != Some(required.role.as_str()) {
        let actual = identity.role().unwrap_or("unknown").to_string();
        tracing::warn!(
            msp_id = %identity.msp_id,
            actual = %actual,
            required = %required.role,
            "authorization denied: role mismatch"
        );
        return Err(AuthError::RoleMismatch {
            msp_id: identity.msp_id.clone(),
            actual,
            required: required.role.clone(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gov_policy() -> RoleRequirement {
        RoleRequirement::new(["Org2MSP"], "govUser")
    }

    #[test]
    fn accepts_matching_issuer_and_role() {
        let identity = CallerIdentity::new("Org2MSP", "x509::CN=gov").with_role("govUser");
        assert!(authorize(&identity, &gov_policy()).is_ok());
    }

    #[test]
    fn rejects_unknown_issuer_before_checking_role() {
        // Role is correct; the issuer check must still fire, and fire first.
        let identity = CallerIdentity::new("Org1MSP", "x509::CN=intruder").with_role("govUser");
        let err = authorize(&identity, &gov_policy()).unwrap_err();
        match err {
            AuthError::MspNotAllowed { msp_id, allowed } => {
                assert_eq!(msp_id, "Org1MSP");
                assert_eq!(allowed, vec!["Org2MSP".to_string()]);
            }
            other => panic!("expected MspNotAllowed, got {other:?}"),
        }
    }

    #[test]
    fn rejects_role_mismatch_with_actual_and_required() {
        let identity = CallerIdentity::new("Org2MSP", "x509::CN=ngo").with_role("ngoAdmin");
        let err = authorize(&identity, &gov_policy()).unwrap_err();
        match err {
            AuthError::RoleMismatch {
                actual, required, ..
            } => {
                assert_eq!(actual, "ngoAdmin");
                assert_eq!(required, "govUser");
            }
            other => panic!("expected RoleMismatch, got {other:?}"),
        }
    }

    #[test]
    fn missing_role_claim_reports_unknown() {
        let identity = CallerIdentity::new("Org2MSP", "x509::CN=anon");
        let err = authorize(&identity, &gov_policy()).unwrap_err();
        match err {
            AuthError::RoleMismatch { actual, .. } => assert_eq!(actual, "unknown"),
            other => panic!("expected RoleMismatch, got {other:?}"),
        }
    }

    #[test]
    fn multiple_allowed_issuers_are_accepted() {
        let policy = RoleRequirement::new(["Org2MSP", "Org4MSP"], "auditor");
        let identity = CallerIdentity::new("Org4MSP", "x509::CN=aud").with_role("auditor");
        assert!(authorize(&identity, &policy).is_ok());
    }
}
