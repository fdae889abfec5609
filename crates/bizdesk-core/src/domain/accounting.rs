//! Accounting Records
//!
//! Account groups and heads are plain lookup lists; balances are entered by
//! hand and never posted.

use super::entity::{Editable, Record};
use super::field::{format_number, Draft, FieldKind, FieldSpec};
use super::setup::STATUSES;

pub const ACCOUNT_TYPES: &[&str] = &["Income", "Expense", "Asset", "Liability"];

// ========================
// Account Group
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct AccountGroup {
    pub id: u32,
    pub account_type: String,
    pub group: String,
    pub note: String,
}

impl AccountGroup {
    pub fn new(id: u32, account_type: &str, group: &str) -> Self {
        Self {
            id,
            account_type: account_type.to_string(),
            group: group.to_string(),
            note: String::new(),
        }
    }
}

const ACCOUNT_GROUP_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("account_type", "Type", ACCOUNT_TYPES).required(),
    FieldSpec::text("group", "Group").required().searchable(),
    FieldSpec::new("note", "Note", FieldKind::LongText),
];

impl Record for AccountGroup {
    const ENTITY: &'static str = "Account Group";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        ACCOUNT_GROUP_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "account_type" => self.account_type.clone(),
            "group" => self.group.clone(),
            "note" => self.note.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for AccountGroup {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            account_type: draft.text("account_type"),
            group: draft.text("group"),
            note: draft.text("note"),
        }
    }
}

// ========================
// Account Head
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct AccountHead {
    pub id: u32,
    pub group: String,
    pub head: String,
    pub debit_balance: f64,
    pub credit_balance: f64,
    pub status: String,
    pub note: String,
}

impl AccountHead {
    pub fn new(id: u32, group: &str, head: &str) -> Self {
        Self {
            id,
            group: group.to_string(),
            head: head.to_string(),
            debit_balance: 0.0,
            credit_balance: 0.0,
            status: "Active".to_string(),
            note: String::new(),
        }
    }

    /// Debit minus credit
    pub fn net_balance(&self) -> f64 {
        self.debit_balance - self.credit_balance
    }
}

const ACCOUNT_HEAD_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("group", "Group").required(),
    FieldSpec::text("head", "Head").required().searchable(),
    FieldSpec::number("debit_balance", "Debit Balance"),
    FieldSpec::number("credit_balance", "Credit Balance"),
    FieldSpec::choice("status", "Status", STATUSES).required().with_default("Active"),
    FieldSpec::new("note", "Note", FieldKind::LongText).hidden(),
];

impl Record for AccountHead {
    const ENTITY: &'static str = "Account Head";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        ACCOUNT_HEAD_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "group" => self.group.clone(),
            "head" => self.head.clone(),
            "debit_balance" => format_number(self.debit_balance),
            "credit_balance" => format_number(self.credit_balance),
            "status" => self.status.clone(),
            "note" => self.note.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for AccountHead {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            group: draft.text("group"),
            head: draft.text("head"),
            debit_balance: draft.number("debit_balance"),
            credit_balance: draft.number("credit_balance"),
            status: draft.text("status"),
            note: draft.text("note"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_group_only_searches_group_name() {
        let group = AccountGroup::new(3, "Asset", "Fixed Asset");
        assert!(group.matches("fixed"));
        assert!(group.matches("asset"));
        assert!(!AccountGroup::new(1, "Income", "Sales").matches("income"));
    }

    #[test]
    fn test_account_head_defaults_active() {
        let draft = Draft::empty(AccountHead::fields());
        assert_eq!(draft.get("status"), "Active");
        let missing: Vec<&str> = draft.validate(AccountHead::fields()).iter().map(|e| e.key).collect();
        assert_eq!(missing, vec!["group", "head"]);
    }

    #[test]
    fn test_net_balance() {
        let mut head = AccountHead::new(1, "Expense", "Petty Cash");
        head.debit_balance = 500.0;
        head.credit_balance = 120.0;
        assert_eq!(head.net_balance(), 380.0);
    }
}
