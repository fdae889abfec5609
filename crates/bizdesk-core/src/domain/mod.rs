//! Domain Layer
//!
//! Contains all records, their field schemas and the sample data each
//! screen starts from.
//! This layer has NO UI dependencies.

mod entity;
mod field;
mod setup;
mod customer;
mod accounting;
mod ledger;
mod production;
mod sales;
mod security;
pub mod seed;

pub use entity::{Record, Editable, DomainError, DomainResult};
pub use field::{Draft, FieldError, FieldKind, FieldProblem, FieldSpec, format_date, format_number};
pub use setup::{
    Bank, Branch, Brand, Commission, Designation, Employee, Product, ProductCategory, Size, Supplier, Unit,
    Warehouse, BANK_NAMES, BRAND_NAMES, CATEGORY_NAMES, PRODUCT_TYPES, STATUSES, UNIT_NAMES,
};
pub use customer::{Customer, Message, CUSTOMER_TYPES, DIVISIONS};
pub use accounting::{AccountGroup, AccountHead, ACCOUNT_TYPES};
pub use ledger::{Cheque, LedgerEntry, PaymentReceipt};
pub use production::{Consumption, ProductionRun, RecipeMaterial};
pub use sales::{Order, OrderItem};
pub use security::{User, USER_ROLES};
