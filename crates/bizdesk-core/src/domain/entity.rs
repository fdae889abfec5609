//! Domain Layer - Core Record Traits
//!
//! Every screen lists one record type and (usually) edits it through a
//! form. `Record` is the listing half, `Editable` the form half.

use thiserror::Error;

use super::field::{Draft, FieldSpec};

/// Core trait for all records held in a screen's collection
pub trait Record: Sized + Clone + PartialEq + std::fmt::Debug + Send + Sync + 'static {
    /// Display name of the entity ("Bank", "Customer", ...)
    const ENTITY: &'static str;

    /// Locally generated sequential identifier
    fn id(&self) -> u32;

    /// Field table shared by the list columns, the search filter and the form
    fn fields() -> &'static [FieldSpec];

    /// Display value of one field, empty for unknown keys
    fn field(&self, key: &str) -> String;

    /// True when the lower-cased `needle` occurs in any searchable field.
    ///
    /// An empty needle matches every record.
    fn matches(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        Self::fields()
            .iter()
            .filter(|spec| spec.searchable)
            .any(|spec| self.field(spec.key).to_lowercase().contains(needle))
    }

    /// Fields rendered as table columns
    fn columns() -> Vec<&'static FieldSpec> {
        Self::fields().iter().filter(|spec| spec.column).collect()
    }
}

/// Records that can be created and edited through a form
pub trait Editable: Record {
    /// Build a record from a draft that already passed validation.
    ///
    /// Numeric fields that are empty become zero.
    fn from_draft(id: u32, draft: &Draft) -> Self;

    /// Copy the record's fields into a fresh draft
    fn to_draft(&self) -> Draft {
        let mut draft = Draft::empty(Self::fields());
        for spec in Self::fields() {
            draft.set(spec.key, self.field(spec.key));
        }
        draft
    }
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
