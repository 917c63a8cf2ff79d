//! Capability traits describing what a stored record can do.
//!
//! Entities are a closed set of concrete structs; services stay generic over
//! these capabilities instead of over an inheritance hierarchy.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Provenance and lifecycle stamp shared by every record.
///
/// Field names mirror the persisted wire format. All four fields are written
/// by the service at create time and are never client-overridable afterward;
/// `updated_at` is refreshed on every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RecordStamp {
    /// Immutable kind tag, e.g. `"BANK"`. Set once at creation.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// Issuer (MSP) that vouched for the creating caller.
    #[serde(rename = "creatorMSP")]
    pub creator_msp: String,

    /// Full identity string of the creating caller.
    pub creator: String,

    /// ISO-8601 creation instant, set exactly once.
    #[serde(rename = "createdAt")]
    pub created_at: String,

    /// ISO-8601 instant of the last mutation (equals `created_at` right
    /// after creation).
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

/// A record that can live in the store under a `"<kind>:<id>"` key.
pub trait LedgerRecord: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// Key-namespace prefix (lowercase), e.g. `"bank"`.
    const KIND: &'static str;

    /// Value of the persisted `type` field (uppercase), e.g. `"BANK"`.
    const TYPE_TAG: &'static str;

    /// Caller-supplied unique identifier within the kind's namespace.
    fn id(&self) -> &str;

    fn stamp(&self) -> &RecordStamp;

    fn stamp_mut(&mut self) -> &mut RecordStamp;
}

/// A record supporting partial updates.
///
/// The patch type carries only domain fields; the stamp, kind tag and id are
/// out of its reach by construction. `apply_patch` overwrites exactly the
/// fields present in the patch and leaves the rest untouched.
pub trait Patchable: LedgerRecord {
    type Patch: DeserializeOwned + Send;

    fn apply_patch(&mut self, patch: Self::Patch);
}

/// A record with a transferable owner field.
pub trait Ownable: LedgerRecord {
    fn owner(&self) -> &str;

    fn set_owner(&mut self, owner: String);
}
