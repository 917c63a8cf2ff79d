//! Asset record: a tradable item with an owner and an appraised value.

use serde::{Deserialize, Serialize};

use ledgerkit_core::{LedgerRecord, Ownable, Patchable, RecordStamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: String,
    pub color: String,
    pub size: u64,
    pub owner: String,
    #[serde(rename = "appraisedValue")]
    pub appraised_value: u64,
    #[serde(flatten)]
    pub stamp: RecordStamp,
}

impl Asset {
    pub fn new(
        id: impl Into<String>,
        color: impl Into<String>,
        size: u64,
        owner: impl Into<String>,
        appraised_value: u64,
    ) -> Self {
        Self {
            id: id.into(),
            color: color.into(),
            size,
            owner: owner.into(),
            appraised_value,
            stamp: RecordStamp::default(),
        }
    }
}

/// Partial update for an asset. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(
        rename = "appraisedValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub appraised_value: Option<u64>,
}

impl LedgerRecord for Asset {
    const KIND: &'static str = "asset";
    const TYPE_TAG: &'static str = "ASSET";

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

impl Patchable for Asset {
    type Patch = AssetPatch;

    fn apply_patch(&mut self, patch: AssetPatch) {
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(owner) = patch.owner {
            self.owner = owner;
        }
        if let Some(value) = patch.appraised_value {
            self.appraised_value = value;
        }
    }
}

impl Ownable for Asset {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn set_owner(&mut self, owner: String) {
        self.owner = owner;
    }
}
