//! Bank record: a financial institution registered by a government user.

use serde::{Deserialize, Serialize};

use ledgerkit_core::{LedgerRecord, Patchable, RecordStamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub id: String,
    pub name: String,
    #[serde(rename = "bankCode")]
    pub bank_code: String,
    #[serde(rename = "branchCode")]
    pub branch_code: String,
    #[serde(flatten)]
    pub stamp: RecordStamp,
}

impl Bank {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        bank_code: impl Into<String>,
        branch_code: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bank_code: bank_code.into(),
            branch_code: branch_code.into(),
            stamp: RecordStamp::default(),
        }
    }
}

/// Partial update for a bank. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "bankCode", default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    #[serde(
        rename = "branchCode",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub branch_code: Option<String>,
}

impl LedgerRecord for Bank {
    const KIND: &'static str = "bank";
    const TYPE_TAG: &'static str = "BANK";

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

impl Patchable for Bank {
    type Patch = BankPatch;

    fn apply_patch(&mut self, patch: BankPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(bank_code) = patch.bank_code {
            self.bank_code = bank_code;
        }
        if let Some(branch_code) = patch.branch_code {
            self.branch_code = branch_code;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_overwrites_only_provided_fields() {
        let mut bank = Bank::new("bank1", "Bank One", "BO", "001");
        bank.apply_patch(BankPatch {
            branch_code: Some("002".to_string()),
            ..BankPatch::default()
        });

        assert_eq!(bank.branch_code, "002");
        assert_eq!(bank.name, "Bank One");
        assert_eq!(bank.bank_code, "BO");
    }
}
