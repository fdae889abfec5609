//! UI Components
//!
//! Reusable Leptos components for the BizDesk shell.

mod dashboard;
mod delete_confirm_button;
mod field_input;
mod header;
mod invoice_page;
mod login_form;
mod order_page;
mod pager;
mod placeholder;
mod record_page;
mod register_form;
mod screens;
mod sidebar;
mod toast;

pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field_input::FieldInput;
pub use header::Header;
pub use invoice_page::InvoicePage;
pub use login_form::LoginForm;
pub use order_page::OrdersPage;
pub use pager::{snapshot, ListToolbar, Pager};
pub use placeholder::Placeholder;
pub use record_page::RecordPage;
pub use register_form::RegisterForm;
pub use screens::RecordScreenView;
pub use sidebar::Sidebar;
pub use toast::ToastView;
