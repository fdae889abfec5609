//! Setup Records
//!
//! Master data maintained under the "Setup" menu: banks, branches, brands,
//! product categories, units, sizes, warehouses, designations, employees,
//! suppliers, products and commissions.

use chrono::NaiveDate;

use super::entity::{Editable, Record};
use super::field::{format_date, format_number, Draft, FieldKind, FieldSpec};

/// Banks offered when registering a branch account
pub const BANK_NAMES: &[&str] = &[
    "Uttara Bank Ltd",
    "United Commercial Bank Ltd",
    "Dutch Bangla Bank",
    "Islami Bank Ltd",
    "Brac Bank",
    "Janata Bank Ltd",
];

pub const BRAND_NAMES: &[&str] = &["Many", "High Power(MTS)", "High Power(Battery)", "Sunca"];

pub const CATEGORY_NAMES: &[&str] = &["Multi Extension Socket", "Battery", "Plug", "No Category"];

pub const UNIT_NAMES: &[&str] = &["Pcs", "Kg"];

pub const PRODUCT_TYPES: &[&str] = &["Finish Goods", "Raw Material"];

pub const STATUSES: &[&str] = &["Active", "Inactive"];

// ========================
// Bank
// ========================

/// A bank the organization keeps accounts with
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    pub id: u32,
    pub name: String,
    pub note: String,
}

impl Bank {
    pub fn new(id: u32, name: &str, note: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            note: note.to_string(),
        }
    }
}

const BANK_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Bank Name").required().searchable(),
    FieldSpec::new("note", "Note", FieldKind::LongText),
];

impl Record for Bank {
    const ENTITY: &'static str = "Bank";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        BANK_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "note" => self.note.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Bank {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.text("name"),
            note: draft.text("note"),
        }
    }
}

// ========================
// Branch
// ========================

/// A bank account held at a specific branch
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub id: u32,
    pub branch_name: String,
    pub bank_name: String,
    pub address: String,
    pub account_no: String,
    pub mobile: String,
    pub email: String,
    pub remarks: String,
}

impl Branch {
    pub fn new(id: u32, branch_name: &str, bank_name: &str, address: &str, account_no: &str) -> Self {
        Self {
            id,
            branch_name: branch_name.to_string(),
            bank_name: bank_name.to_string(),
            address: address.to_string(),
            account_no: account_no.to_string(),
            mobile: String::new(),
            email: String::new(),
            remarks: String::new(),
        }
    }
}

const BRANCH_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("branch_name", "Branch Name").required().searchable(),
    FieldSpec::choice("bank_name", "Bank Name", BANK_NAMES).required().searchable(),
    FieldSpec::text("address", "Address").searchable(),
    FieldSpec::text("account_no", "Account No").required().searchable(),
    FieldSpec::text("mobile", "Mobile").hidden(),
    FieldSpec::text("email", "Email").hidden(),
    FieldSpec::new("remarks", "Remarks", FieldKind::LongText).hidden(),
];

impl Record for Branch {
    const ENTITY: &'static str = "Branch";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        BRANCH_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "branch_name" => self.branch_name.clone(),
            "bank_name" => self.bank_name.clone(),
            "address" => self.address.clone(),
            "account_no" => self.account_no.clone(),
            "mobile" => self.mobile.clone(),
            "email" => self.email.clone(),
            "remarks" => self.remarks.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Branch {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            branch_name: draft.text("branch_name"),
            bank_name: draft.text("bank_name"),
            address: draft.text("address"),
            account_no: draft.text("account_no"),
            mobile: draft.text("mobile"),
            email: draft.text("email"),
            remarks: draft.text("remarks"),
        }
    }
}

// ========================
// Brand
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Brand {
    pub id: u32,
    pub name: String,
    /// Customer the brand is produced for, if any
    pub customer: String,
}

impl Brand {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            customer: String::new(),
        }
    }
}

const BRAND_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Brand Name").required().searchable(),
    FieldSpec::text("customer", "Customer"),
];

impl Record for Brand {
    const ENTITY: &'static str = "Brand";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        BRAND_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "customer" => self.customer.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Brand {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.text("name"),
            customer: draft.text("customer"),
        }
    }
}

// ========================
// Product Category / Unit
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCategory {
    pub id: u32,
    pub name: String,
}

const CATEGORY_FIELDS: &[FieldSpec] = &[FieldSpec::text("name", "Category Name").required().searchable()];

impl Record for ProductCategory {
    const ENTITY: &'static str = "Product Category";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        CATEGORY_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for ProductCategory {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.text("name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub id: u32,
    pub name: String,
}

const UNIT_FIELDS: &[FieldSpec] = &[FieldSpec::text("name", "Unit Name").required().searchable()];

impl Record for Unit {
    const ENTITY: &'static str = "Unit";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        UNIT_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Unit {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.text("name"),
        }
    }
}

// ========================
// Size
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Size {
    pub id: u32,
    pub size_name: String,
    pub remarks: String,
}

const SIZE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("size_name", "Size Name").required().searchable(),
    FieldSpec::text("remarks", "Remarks").searchable(),
];

impl Record for Size {
    const ENTITY: &'static str = "Size";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        SIZE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "size_name" => self.size_name.clone(),
            "remarks" => self.remarks.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Size {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            size_name: draft.text("size_name"),
            remarks: draft.text("remarks"),
        }
    }
}

// ========================
// Warehouse
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Warehouse {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub mobile: String,
    pub email: String,
}

impl Warehouse {
    pub fn new(id: u32, name: &str, address: &str, mobile: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            address: address.to_string(),
            mobile: mobile.to_string(),
            email: String::new(),
        }
    }
}

const WAREHOUSE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Warehouse Name").required().searchable(),
    FieldSpec::text("address", "Address").searchable(),
    FieldSpec::text("mobile", "Mobile"),
    FieldSpec::text("email", "Email"),
];

impl Record for Warehouse {
    const ENTITY: &'static str = "Warehouse";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        WAREHOUSE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "address" => self.address.clone(),
            "mobile" => self.mobile.clone(),
            "email" => self.email.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Warehouse {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.text("name"),
            address: draft.text("address"),
            mobile: draft.text("mobile"),
            email: draft.text("email"),
        }
    }
}

// ========================
// Designation
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Designation {
    pub id: u32,
    pub designation_name: String,
    pub department: String,
    pub description: String,
    pub salary: f64,
    pub created_date: Option<NaiveDate>,
    pub status: String,
}

impl Designation {
    pub fn new(id: u32, designation_name: &str, department: &str, created_date: Option<NaiveDate>) -> Self {
        Self {
            id,
            designation_name: designation_name.to_string(),
            department: department.to_string(),
            description: String::new(),
            salary: 0.0,
            created_date,
            status: "Active".to_string(),
        }
    }
}

const DESIGNATION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("designation_name", "Designation Name").required().searchable(),
    FieldSpec::text("department", "Department").searchable(),
    FieldSpec::new("description", "Description", FieldKind::LongText).hidden(),
    FieldSpec::number("salary", "Salary").hidden(),
    FieldSpec::new("created_date", "Created Date", FieldKind::Date),
    FieldSpec::choice("status", "Status", STATUSES).with_default("Active"),
];

impl Record for Designation {
    const ENTITY: &'static str = "Designation";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        DESIGNATION_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "designation_name" => self.designation_name.clone(),
            "department" => self.department.clone(),
            "description" => self.description.clone(),
            "salary" => format_number(self.salary),
            "created_date" => format_date(self.created_date),
            "status" => self.status.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Designation {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            designation_name: draft.text("designation_name"),
            department: draft.text("department"),
            description: draft.text("description"),
            salary: draft.number("salary"),
            created_date: draft.date("created_date"),
            status: draft.text("status"),
        }
    }
}

// ========================
// Employee
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub id: u32,
    pub employee_name: String,
    pub designation: String,
    pub address: String,
    pub contact_no: String,
    pub salary: f64,
    pub note: String,
}

impl Employee {
    pub fn new(id: u32, employee_name: &str, designation: &str, address: &str, contact_no: &str) -> Self {
        Self {
            id,
            employee_name: employee_name.to_string(),
            designation: designation.to_string(),
            address: address.to_string(),
            contact_no: contact_no.to_string(),
            salary: 0.0,
            note: String::new(),
        }
    }
}

const EMPLOYEE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("employee_name", "Employee Name").required().searchable(),
    FieldSpec::text("designation", "Designation").required().searchable(),
    FieldSpec::text("address", "Address").searchable(),
    FieldSpec::text("contact_no", "Contact No").required().searchable(),
    FieldSpec::number("salary", "Salary"),
    FieldSpec::new("note", "Note", FieldKind::LongText),
];

impl Record for Employee {
    const ENTITY: &'static str = "Employee";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        EMPLOYEE_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "employee_name" => self.employee_name.clone(),
            "designation" => self.designation.clone(),
            "address" => self.address.clone(),
            "contact_no" => self.contact_no.clone(),
            "salary" => format_number(self.salary),
            "note" => self.note.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Employee {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            employee_name: draft.text("employee_name"),
            designation: draft.text("designation"),
            address: draft.text("address"),
            contact_no: draft.text("contact_no"),
            salary: draft.number("salary"),
            note: draft.text("note"),
        }
    }
}

// ========================
// Supplier
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Supplier {
    pub id: u32,
    pub name: String,
    pub supplier_type: String,
    pub contact_person: String,
    pub address: String,
    pub phone: String,
    pub mobile: String,
    pub email: String,
    pub country: String,
    pub vat_reg_no: String,
}

impl Supplier {
    pub fn new(id: u32, name: &str, contact_person: &str, address: &str, mobile: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            supplier_type: String::new(),
            contact_person: contact_person.to_string(),
            address: address.to_string(),
            phone: String::new(),
            mobile: mobile.to_string(),
            email: String::new(),
            country: String::new(),
            vat_reg_no: String::new(),
        }
    }
}

const SUPPLIER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("name", "Supplier Name").required().searchable(),
    FieldSpec::text("supplier_type", "Type").hidden(),
    FieldSpec::text("contact_person", "Contact Person").searchable(),
    FieldSpec::text("address", "Address").searchable(),
    FieldSpec::text("phone", "Phone").hidden(),
    FieldSpec::text("mobile", "Mobile").required().searchable(),
    FieldSpec::text("email", "Email").hidden(),
    FieldSpec::text("country", "Country").hidden(),
    FieldSpec::text("vat_reg_no", "VAT Reg. No").hidden(),
];

impl Record for Supplier {
    const ENTITY: &'static str = "Supplier";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        SUPPLIER_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "name" => self.name.clone(),
            "supplier_type" => self.supplier_type.clone(),
            "contact_person" => self.contact_person.clone(),
            "address" => self.address.clone(),
            "phone" => self.phone.clone(),
            "mobile" => self.mobile.clone(),
            "email" => self.email.clone(),
            "country" => self.country.clone(),
            "vat_reg_no" => self.vat_reg_no.clone(),
            _ => String::new(),
        }
    }
}

impl Editable for Supplier {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            name: draft.text("name"),
            supplier_type: draft.text("supplier_type"),
            contact_person: draft.text("contact_person"),
            address: draft.text("address"),
            phone: draft.text("phone"),
            mobile: draft.text("mobile"),
            email: draft.text("email"),
            country: draft.text("country"),
            vat_reg_no: draft.text("vat_reg_no"),
        }
    }
}

// ========================
// Product
// ========================

/// A sellable or consumable product with its price tiers
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u32,
    pub product_code: String,
    pub product_name: String,
    pub product_type: String,
    pub cost_price: f64,
    pub retail_price: f64,
    pub dealer_price: f64,
    pub whole_price: f64,
    pub brand: String,
    pub category: String,
    pub unit: String,
    pub website_publish: bool,
}

impl Product {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        product_code: &str,
        product_name: &str,
        cost_price: f64,
        retail_price: f64,
        dealer_price: f64,
        whole_price: f64,
        brand: &str,
    ) -> Self {
        Self {
            id,
            product_code: product_code.to_string(),
            product_name: product_name.to_string(),
            product_type: "Finish Goods".to_string(),
            cost_price,
            retail_price,
            dealer_price,
            whole_price,
            brand: brand.to_string(),
            category: "Multi Extension Socket".to_string(),
            unit: "Pcs".to_string(),
            website_publish: false,
        }
    }
}

const PRODUCT_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("product_code", "Product Code").searchable(),
    FieldSpec::text("product_name", "Product Name").required().searchable(),
    FieldSpec::choice("product_type", "Product Type", PRODUCT_TYPES)
        .required()
        .searchable()
        .with_default("Finish Goods"),
    FieldSpec::number("cost_price", "Cost Price"),
    FieldSpec::number("retail_price", "Retail Price"),
    FieldSpec::number("dealer_price", "Dealer Price"),
    FieldSpec::number("whole_price", "Whole Price"),
    FieldSpec::choice("brand", "Brand", BRAND_NAMES).required().hidden(),
    FieldSpec::choice("category", "Category", CATEGORY_NAMES).required().hidden(),
    FieldSpec::choice("unit", "Unit", UNIT_NAMES).hidden().with_default("Pcs"),
    FieldSpec::new("website_publish", "Website Publish", FieldKind::Flag).with_default("false"),
];

impl Record for Product {
    const ENTITY: &'static str = "Product";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        PRODUCT_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "product_code" => self.product_code.clone(),
            "product_name" => self.product_name.clone(),
            "product_type" => self.product_type.clone(),
            "cost_price" => format_number(self.cost_price),
            "retail_price" => format_number(self.retail_price),
            "dealer_price" => format_number(self.dealer_price),
            "whole_price" => format_number(self.whole_price),
            "brand" => self.brand.clone(),
            "category" => self.category.clone(),
            "unit" => self.unit.clone(),
            "website_publish" => self.website_publish.to_string(),
            _ => String::new(),
        }
    }
}

impl Editable for Product {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            product_code: draft.text("product_code"),
            product_name: draft.text("product_name"),
            product_type: draft.text("product_type"),
            cost_price: draft.number("cost_price"),
            retail_price: draft.number("retail_price"),
            dealer_price: draft.number("dealer_price"),
            whole_price: draft.number("whole_price"),
            brand: draft.text("brand"),
            category: draft.text("category"),
            unit: draft.text("unit"),
            website_publish: draft.flag("website_publish"),
        }
    }
}

// ========================
// Commission
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Commission {
    pub id: u32,
    pub customer_name: String,
    pub address: String,
    pub total_amount: f64,
    pub commission_percentage: f64,
    pub category: String,
    pub last_date_of_commission: Option<NaiveDate>,
}

impl Commission {
    pub fn new(id: u32, customer_name: &str, address: &str, total_amount: f64, commission_percentage: f64) -> Self {
        Self {
            id,
            customer_name: customer_name.to_string(),
            address: address.to_string(),
            total_amount,
            commission_percentage,
            category: String::new(),
            last_date_of_commission: None,
        }
    }

    /// Commission owed on the total amount
    pub fn commission_amount(&self) -> f64 {
        self.total_amount * self.commission_percentage / 100.0
    }
}

const COMMISSION_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("customer_name", "Customer Name").required().searchable(),
    FieldSpec::text("address", "Address").searchable(),
    FieldSpec::number("total_amount", "Total Amount").required(),
    FieldSpec::number("commission_percentage", "Commission (%)").required(),
    FieldSpec::text("category", "Category").hidden(),
    FieldSpec::new("last_date_of_commission", "Last Date", FieldKind::Date),
];

impl Record for Commission {
    const ENTITY: &'static str = "Commission";

    fn id(&self) -> u32 {
        self.id
    }

    fn fields() -> &'static [FieldSpec] {
        COMMISSION_FIELDS
    }

    fn field(&self, key: &str) -> String {
        match key {
            "customer_name" => self.customer_name.clone(),
            "address" => self.address.clone(),
            "total_amount" => format_number(self.total_amount),
            "commission_percentage" => format_number(self.commission_percentage),
            "category" => self.category.clone(),
            "last_date_of_commission" => format_date(self.last_date_of_commission),
            _ => String::new(),
        }
    }
}

impl Editable for Commission {
    fn from_draft(id: u32, draft: &Draft) -> Self {
        Self {
            id,
            customer_name: draft.text("customer_name"),
            address: draft.text("address"),
            total_amount: draft.number("total_amount"),
            commission_percentage: draft.number("commission_percentage"),
            category: draft.text("category"),
            last_date_of_commission: draft.date("last_date_of_commission"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_matches_case_insensitively() {
        let bank = Bank::new(1, "Uttara Bank Ltd", "O");
        assert!(bank.matches("utt"));
        assert!(bank.matches(""));
        // note is not a searchable field
        assert!(!bank.matches("o"));
    }

    #[test]
    fn test_branch_searches_bank_and_account() {
        let branch = Branch::new(1, "A To Z", "Dutch Bangla Bank", "Nawabpur, Dhaka", "104110021818");
        assert!(branch.matches("dutch"));
        assert!(branch.matches("1041100"));
        assert!(!branch.matches("brac"));
    }

    #[test]
    fn test_draft_round_trip_keeps_numbers() {
        let product = Product::new(3, "805", "MTS- 805 -2p3m", 251.0, 425.0, 325.0, 335.0, "High Power(MTS)");
        let draft = product.to_draft();
        assert_eq!(draft.get("retail_price"), "425");
        assert_eq!(draft.get("website_publish"), "false");
        assert_eq!(Product::from_draft(3, &draft), product);
    }

    #[test]
    fn test_designation_date_survives_draft() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 10);
        let designation = Designation::new(1, "Driver", "Operations", date);
        let draft = designation.to_draft();
        assert_eq!(draft.get("created_date"), "2025-01-10");
        assert_eq!(Designation::from_draft(1, &draft).created_date, date);
    }

    #[test]
    fn test_columns_skip_hidden_fields() {
        let keys: Vec<_> = Supplier::columns().iter().map(|spec| spec.key).collect();
        assert_eq!(keys, vec!["name", "contact_person", "address", "mobile"]);
    }

    #[test]
    fn test_commission_amount() {
        let commission = Commission::new(1, "A To Z", "Nawabpur, Dhaka", 7500.0, 3.0);
        assert_eq!(commission.commission_amount(), 225.0);
    }
}
