//! Bizdesk Core
//!
//! Layered architecture:
//! - domain: Records, field schemas and seed data
//! - repository: In-memory collections behind the `Repository` trait
//! - view: List, form and invoice controllers driven by the UI
//! - auth / navigation / config: Shell state for the front end
//!
//! Nothing here touches the DOM, so every rule the screens rely on can be
//! exercised with plain `cargo test`.

pub mod auth;
pub mod config;
pub mod domain;
pub mod navigation;
pub mod repository;
pub mod view;

pub use auth::{AuthError, AuthState, Authenticator, Credentials, RegistrationError, RegistrationForm, Session, StaticAuthenticator};
pub use config::{AppConfig, ConfigError, LoginConfig};
pub use domain::{DomainError, DomainResult, Draft, Editable, FieldError, FieldKind, FieldProblem, FieldSpec, Record};
pub use navigation::{menu_label, MenuItem, MenuSection, MenuState, RecordScreen, Route, MENU};
pub use repository::{Collection, Repository};
pub use view::{
    EditPolicy, FormController, FormError, Invoice, InvoiceDraft, InvoiceError, InvoiceKind, LineDraft, LineItem,
    ListAction, ListState, OrderError, OrderReview, PageSize, PageView, PayType, Settlement, SubmitOutcome,
};
