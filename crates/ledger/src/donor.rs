//! Donor record: a public user donating through the platform.

use serde::{Deserialize, Serialize};

use ledgerkit_core::{LedgerRecord, Patchable, RecordStamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donor {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(flatten)]
    pub stamp: RecordStamp,
}

impl Donor {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            alias: None,
            email: email.into(),
            phone: phone.into(),
            address: None,
            stamp: RecordStamp::default(),
        }
    }
}

/// Partial update for a donor. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LedgerRecord for Donor {
    const KIND: &'static str = "donor";
    const TYPE_TAG: &'static str = "DONOR";

    fn id(&self) -> &str {
        &self.id
    }

    fn stamp(&self) -> &RecordStamp {
        &self.stamp
    }

    fn stamp_mut(&mut self) -> &mut RecordStamp {
        &mut self.stamp
    }
}

impl Patchable for Donor {
    type Patch = DonorPatch;

    fn apply_patch(&mut self, patch: DonorPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(alias) = patch.alias {
            self.alias = Some(alias);
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
    }
}
