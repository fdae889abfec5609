//! View Controllers
//!
//! UI-independent state machines behind every screen: the list (search and
//! pagination), the record form, the invoice line-item form and the
//! online order review.

mod list;
mod form;
mod invoice;
mod order;

pub use list::{total_pages, ListAction, ListState, PageSize, PageView};
pub use form::{EditPolicy, FormController, FormError, SubmitOutcome};
pub use invoice::{Invoice, InvoiceDraft, InvoiceError, InvoiceKind, LineDraft, LineItem, PayType, Settlement};
pub use order::{OrderError, OrderReview};
