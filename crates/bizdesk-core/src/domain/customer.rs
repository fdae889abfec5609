//! Customer Records
//!
//! Customer accounts, and the bulk messages sent to groups of them.

use chrono::NaiveDate;

use super::entity::{Editable, Record};
use super::field::{format_date, format_number, Draft, FieldKind, FieldSpec};

pub const CUSTOMER_TYPES: &[&str] = &["Corporate", "Retail", "Wholesale", "Distributor"];

/// Audiences a message can be addressed to
pub const MESSAGE_AUDIENCES: &[&str] = &["Regular", "Premium", "Corporate", "Wholesale", "Retail"];

pub const MESSAGE_STATUSES: &[&str] = &["Sent", "Failed", "Pending"];

pub const DIVISIONS: &[&str] = &[
    "Dhaka",
    "Chattogram",
    "Rajshahi",
    "Khulna",
    "Barishal",
    "Sylhet",
    "Rangpur",
    "Mymensingh",
];

/// A customer account with its location and credit terms
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: u32,
    pub customer_name: String,
    pub customer_type: String,
    pub division: String,
    pub district: String,
    pub thana: String,
    pub contact_person: String,
    pub mobile: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub commission: f64,
    pub credit_limit: f64,
    pub billing_address: String,
}

impl Customer {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        customer_name: &str,
        customer_type: &str,
        division: &str,
        district: &str,
        thana: &str,
        mobile: &str,
        address: &str,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.to_string(),
            customer_type: customer_type.to_string(),
            division: division.to_string(),
            district: district.to_string(),
            thana: thana.to_string(),
            contact_person: String::new(),
            mobile: mobile.to_string(),
            phone: String::new(),
            email: String::new(),
            address: address.to_string(),
            commission: 0.0,
            credit_limit: 0.0,
            billing_address: String::new(),
        }
    }
}

const CUSTOMER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("customer_name", "Customer").required().searchable(),
    FieldSpec::choice("customer_type", "Customer Type", CUSTOMER_TYPES)
        .required()
        .searchable(),
    FieldSpec::choice("division", "Division", DIVISIONS).required().searchable(),
    FieldSpec::text("district", "District").required().searchable(),
    FieldSpec::text("thana", "Thana").required(),
    FieldSpec::text("contact_person", "Contact Person").hidden(),
    FieldSpec::text("mobile", "Mobile").required().searchable(),
    FieldSpec::text("phone", "Phone").hidden(),
    FieldSpec::text("email", "Email").hidden(),
    FieldSpec::text("address", "Address").required(),
    FieldSpec::number("commission", "Commission (%)").hidden(),
    FieldSpec::number("credit_limit", "Credit Limit").hidden(),
    FieldSpec::new("billing_address", "Billing Address", FieldKind::LongText).hidden(),
];

impl Record for Customer {
    const ENTITY: &'static str = "Customer";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        CUSTOMER_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "customer_name" => self.customer_name.clone(),
            "customer_type" => self.customer_type.clone(),
            "division" => self.division.clone(),
            "district" => self.district.clone(),
            "thana" => self.thana.clone(),
            "contact_person" => self.contact_person.clone(),
            "mobile" => self.mobile.clone(),
            "phone" => self.phone.clone(),
            "email" => self.email.clone(),
            "address" => self.address.clone(),
            "commission" => format_number(self.commission),
            "credit_limit" => format_number(self.credit_limit),
            "billing_address" => self.billing_address.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Customer {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            customer_name: draft.text("customer_name"),
            customer_type: draft.text("customer_type"),
            division: draft.text("division"),
            district: draft.text("district"),
            thana: draft.text("thana"),
            contact_person: draft.text("contact_person"),
            mobile: draft.text("mobile"),
            phone: draft.text("phone"),
            email: draft.text("email"),
            address: draft.text("address"),
            commission: draft.number("commission"),
            credit_limit: draft.number("credit_limit"),
            billing_address: draft.text("billing_address"),
        }
    }
}

// ========================
// Message
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: u32,
    pub audience: String,
    /// Send to every customer of the audience type rather than a list
    pub type_wise: bool,
    pub message: String,
    pub date: Option<NaiveDate>,
    pub status: String,
}

impl Message {
    pub fn new(id: u32, audience: &str, message: &str, date: NaiveDate, status: &str) -> Self {
        Self {
            id,
            audience: audience.to_string(),
            type_wise: false,
            message: message.to_string(),
            date: Some(date),
            status: status.to_string(),
        }
    }
}

const MESSAGE_FIELDS: &[FieldSpec] = &[
    FieldSpec::choice("audience", "Customer Type", MESSAGE_AUDIENCES).required().searchable(),
    FieldSpec::new("type_wise", "Customer Type Wise", FieldKind::Flag).hidden().with_default("false"),
    FieldSpec::new("message", "Message", FieldKind::LongText).required().searchable(),
    FieldSpec::new("date", "Date", FieldKind::Date).computed(),
    FieldSpec::choice("status", "Status", MESSAGE_STATUSES).computed().with_default("Sent"),
];

impl Record for Message {
    const ENTITY: &'static str = "Message";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        MESSAGE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "audience" => self.audience.clone(),
            "type_wise" => self.type_wise.to_string(),
            "message" => self.message.clone(),
            "date" => format_date(self.date),
            "status" => self.status.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Message {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            audience: draft.text("audience"),
            type_wise: draft.flag("type_wise"),
            message: draft.text("message"),
            date: draft.date("date"),
            status: draft.text("status"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_search_fields() {
        let customer = Customer::new(
            4,
            "Quick Retail",
            "Retail",
            "Dhaka",
            "Gazipur",
            "Gazipur Sadar",
            "01612345678",
            "Gazipur Sadar, Gazipur",
        );
        assert!(customer.matches("gazi"));
        assert!(customer.matches("0161"));
        // thana is shown but not searched
        assert!(!customer.matches("sadar"));
    }

    #[test]
    fn test_customer_requires_location() {
        let errors = Customer::new(0, "", "", "", "", "", "", "").to_draft().validate(Customer::fields());
        let missing: Vec<&str> = errors.iter().map(|e| e.key).collect();
        assert_eq!(
            missing,
            vec!["customer_name", "customer_type", "division", "district", "thana", "mobile", "address"]
        );
    }

    #[test]
    fn test_message_is_stamped_as_sent() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 16).unwrap();
        let mut draft = Draft::empty(Message::fields());
        draft.stamp_dates(Message::fields(), today);
        draft.set("audience", "Premium");
        draft.set("message", "Exclusive offer for our premium customers!");
        assert!(draft.validate(Message::fields()).is_empty());

        let message = Message::from_draft(4, &draft);
        assert_eq!(message.date, Some(today));
        assert_eq!(message.status, "Sent");
        assert!(!message.type_wise);
        assert!(message.matches("exclusive"));
    }
}
