//! NGO record: a registered non-governmental organization.

use serde::{Deserialize, Serialize};

use ledgerkit_core::{LedgerRecord, Patchable, RecordStamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ngo {
    pub id: String,
    pub name: String,
    #[serde(rename = "registrationNumber")]
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub address: String,
    #[serde(flatten)]
    pub stamp: RecordStamp,
}

impl Ngo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        registration_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            registration_number: registration_number.into(),
            description: None,
            website: None,
            email: None,
            phone: None,
            address: address.into(),
            stamp: RecordStamp::default(),
        }
    }
}

/// Partial update for an NGO. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NgoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "registrationNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl LedgerRecord for Ngo {
    const KIND: &'static str = "ngo";
    const TYPE_TAG: &'static str = "NGO";

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

impl Patchable for Ngo {
    type Patch = NgoPatch;

    fn apply_patch(&mut self, patch: NgoPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(registration_number) = patch.registration_number {
            self.registration_number = registration_number;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(website) = patch.website {
            self.website = Some(website);
        }
        if let Some(email) = patch.email {
            self.email = Some(email);
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
    }
}
