//! Ledger operation error taxonomy.

use thiserror::Error;

use ledgerkit_auth::AuthError;
use ledgerkit_core::{CodecError, KeyError};
use ledgerkit_store::StoreError;

/// Result type used across the entity services.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Error surfaced by ledger operations.
///
/// Decode degradation is deliberately missing: malformed stored bytes fall
/// back to the raw-string variant during listing and never abort an
/// operation. No variant is retried internally; resubmission is the calling
/// environment's business.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Create on a key that is already present.
    #[error("{kind} '{id}' already exists")]
    AlreadyExists { kind: &'static str, id: String },

    /// Read/update/delete on an absent key.
    #[error("{kind} '{id}' does not exist")]
    NotFound { kind: &'static str, id: String },

    /// Issuer or role check failed before the store was touched.
    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    /// Identifier unusable as a key component.
    #[error(transparent)]
    InvalidId(#[from] KeyError),

    /// Canonical encoding/decoding failure.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Backing store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl LedgerError {
    pub fn already_exists(kind: &'static str, id: impl Into<String>) -> Self {
        Self::AlreadyExists {
            kind,
            id: id.into(),
        }
    }

    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }
}
