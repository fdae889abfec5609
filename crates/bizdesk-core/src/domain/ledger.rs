//! Money Movements
//!
//! Cheques waiting for authorization, payments received from customers or
//! paid to suppliers, and manual general ledger entries.

use super::entity::{Editable, Record};
use super::field::{format_date, format_number, Draft, FieldKind, FieldSpec};

pub const PARTY_TYPES: &[&str] = &["Customer", "Supplier"];

pub const RECEIPT_PAY_TYPES: &[&str] = &["Cash", "Credit Card", "Bank Transfer", "Other"];

pub const LEDGER_SIDES: &[&str] = &["Debit", "Credit"];

pub const LEDGER_PAY_TYPES: &[&str] = &["Cash", "Credit Card", "Bank Transfer", "Check", "Other"];

pub const LEDGER_ACCOUNT_TYPES: &[&str] = &["Assets", "Liabilities", "Equity", "Revenue", "Expenses"];

// ========================
// Cheque
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Cheque {
    pub id: u32,
    pub customer: String,
    pub bank: String,
    pub branch: String,
    pub account_no: String,
    pub maturity_date: Option<chrono::NaiveDate>,
    /// Who authorized it, empty while pending
    pub authorized_by: String,
}

const CHEQUE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("customer", "Customer").required().searchable(),
    FieldSpec::text("bank", "Bank").required().searchable(),
    FieldSpec::text("branch", "Branch").searchable(),
    FieldSpec::text("account_no", "Account No").required().searchable(),
    FieldSpec::new("maturity_date", "Maturity Date", FieldKind::Date).required(),
    FieldSpec::text("authorized_by", "Autho").searchable(),
];

impl Record for Cheque {
    const ENTITY: &'static str = "Cheque";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        CHEQUE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "customer" => self.customer.clone(),
            "bank" => self.bank.clone(),
            "branch" => self.branch.clone(),
            "account_no" => self.account_no.clone(),
            "maturity_date" => format_date(self.maturity_date),
            "authorized_by" => self.authorized_by.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Cheque {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            customer: draft.text("customer"),
            bank: draft.text("bank"),
            branch: draft.text("branch"),
            account_no: draft.text("account_no"),
            maturity_date: draft.date("maturity_date"),
            authorized_by: draft.text("authorized_by"),
        }
    }
}

// ========================
// Payment Received
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentReceipt {
    pub id: u32,
    pub party_type: String,
    pub party: String,
    pub pay_type: String,
    pub address: String,
    pub previous_due: f64,
    pub less: f64,
    pub payable: f64,
    pub paid: f64,
    /// `payable - paid`, worked out on save
    pub due: f64,
    pub note: String,
}

const PAYMENT_RECEIPT_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("party_type", "Received From", PARTY_TYPES).required().with_default("Customer"),
    FieldSpec::text("party", "Name").required().searchable(),
    FieldSpec::choice("pay_type", "Payment Type", RECEIPT_PAY_TYPES).required().with_default("Cash"),
    FieldSpec::text("address", "Address").hidden(),
    FieldSpec::number("previous_due", "Previous Due"),
    FieldSpec::number("less", "Less").hidden(),
    FieldSpec::number("payable", "Payable"),
    FieldSpec::number("paid", "Paid"),
    FieldSpec::number("due", "Due").computed(),
    FieldSpec::new("note", "Note", FieldKind::LongText).hidden(),
];

impl Record for PaymentReceipt {
    const ENTITY: &'static str = "Payment";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        PAYMENT_RECEIPT_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "party_type" => self.party_type.clone(),
            "party" => self.party.clone(),
            "pay_type" => self.pay_type.clone(),
            "address" => self.address.clone(),
            "previous_due" => format_number(self.previous_due),
            "less" => format_number(self.less),
            "payable" => format_number(self.payable),
            "paid" => format_number(self.paid),
            "due" => format_number(self.due),
            "note" => self.note.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for PaymentReceipt {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        let payable = draft.number("payable");
        let paid = draft.number("paid");
        Self {
            id,
            party_type: draft.text("party_type"),
            party: draft.text("party"),
            pay_type: draft.text("pay_type"),
            address: draft.text("address"),
            previous_due: draft.number("previous_due"),
            less: draft.number("less"),
            payable,
            paid,
            due: payable - paid,
            note: draft.text("note"),
        }
    }
}

// ========================
// General Ledger
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    pub id: u32,
    /// `Debit` or `Credit`
    pub side: String,
    pub pay_type: String,
    pub account_type: String,
    pub account_group: String,
    pub account_head: String,
    pub amount: f64,
    pub note: String,
}

impl LedgerEntry {
    /// Amount with credits negative, for running balances
    pub fn signed_amount(&self) -> f64 {
        if self.side == "Credit" {
            -self.amount
        } else {
            self.amount
        }
    }
}

const LEDGER_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("side", "Ledger Type", LEDGER_SIDES).required().with_default("Debit"),
    FieldSpec::choice("pay_type", "Payment Type", LEDGER_PAY_TYPES).required().with_default("Cash"),
    FieldSpec::choice("account_type", "Account Type", LEDGER_ACCOUNT_TYPES).required().searchable(),
    FieldSpec::text("account_group", "Account Group").required().searchable(),
    FieldSpec::text("account_head", "Account Head").required().searchable(),
    FieldSpec::number("amount", "Amount").required().positive(),
    FieldSpec::new("note", "Note", FieldKind::LongText),
];

impl Record for LedgerEntry {
    const ENTITY: &'static str = "Ledger Entry";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        LEDGER_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "side" => self.side.clone(),
            "pay_type" => self.pay_type.clone(),
            "account_type" => self.account_type.clone(),
            "account_group" => self.account_group.clone(),
            "account_head" => self.account_head.clone(),
            "amount" => format_number(self.amount),
            "note" => self.note.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for LedgerEntry {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            side: draft.text("side"),
            pay_type: draft.text("pay_type"),
            account_type: draft.text("account_type"),
            account_group: draft.text("account_group"),
            account_head: draft.text("account_head"),
            amount: draft.number("amount"),
            note: draft.text("note"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_due_is_derived_on_save() {
        let mut draft = Draft::empty(PaymentReceipt::fields());
        draft.set("party", "Gazi Electric");
        draft.set("payable", "1250");
        draft.set("paid", "1000");
        // a stale due from an earlier edit is ignored
        draft.set("due", "9999");
        assert!(draft.validate(PaymentReceipt::fields()).is_empty());

        let receipt = PaymentReceipt::from_draft(1, &draft);
        assert_eq!(receipt.due, 250.0);
        assert_eq!(receipt.party_type, "Customer");
        assert_eq!(receipt.pay_type, "Cash");
        assert_eq!(receipt.field("due"), "250");
    }

    #[test]
    fn test_ledger_amount_must_be_positive() {
        let mut draft = Draft::empty(LedgerEntry::fields());
        draft.set("account_type", "Assets");
        draft.set("account_group", "Current Assets");
        draft.set("account_head", "Cash");
        draft.set("amount", "0");

        let errors = draft.validate(LedgerEntry::fields());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Amount must be greater than zero");

        draft.set("amount", "500");
        draft.set("side", "Credit");
        let entry = LedgerEntry::from_draft(1, &draft);
        assert_eq!(entry.signed_amount(), -500.0);
        assert!(entry.matches("current"));
    }

    #[test]
    fn test_cheque_requires_maturity_date() {
        let mut draft = Draft::empty(Cheque::fields());
        draft.set("customer", "Gazi Electric");
        draft.set("bank", "Brac Bank");
        draft.set("account_no", "1501202");
        let keys: Vec<&str> = draft.validate(Cheque::fields()).iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["maturity_date"]);

        draft.set("maturity_date", "2025-04-30");
        let cheque = Cheque::from_draft(1, &draft);
        assert_eq!(cheque.field("maturity_date"), "2025-04-30");
        assert!(cheque.matches("1501"));
    }
}
