//! Repository Layer - Core Traits
//!
//! Defines the abstract interface screens use to mutate their records.
//! The only implementation is the in-memory `Collection`.

use crate::domain::{DomainError, DomainResult, Record};

/// Core repository trait for CRUD operations
///
/// Generic over any Record type. Operations are synchronous: every change
/// completes inside the UI event that triggered it.
pub trait Repository<T: Record> {
    /// Append a record as-is; the caller picks the id
    fn create(&mut self, record: T) -> DomainResult<T>;

    /// Find record by ID
    fn find_by_id(&self, id: u32) -> Option<&T>;

    /// All records in insertion order
    fn list(&self) -> &[T];

    /// Replace the row at `index`, which must still carry the record's id.
    ///
    /// Rows are addressed by position because ids are not unique once the
    /// allocator has handed one out twice.
    fn update_at(&mut self, index: usize, record: T) -> DomainResult<T>;

    /// Remove the row at `index`, returning it
    fn delete_at(&mut self, index: usize) -> DomainResult<T>;

    /// Position of the first row equal to `record`
    fn position_of(&self, record: &T) -> Option<usize> {
        self.list().iter().position(|r| r == record)
    }

    /// Remove the row equal to `record`; rows sharing only its id stay
    fn delete_record(&mut self, record: &T) -> DomainResult<T> {
        match self.position_of(record) {
            Some(index) => self.delete_at(index),
            None => Err(DomainError::NotFound(format!("{} {}", T::ENTITY, record.id()))),
        }
    }

    /// Id the next created record gets: current length plus one
    fn next_id(&self) -> u32 {
        self.list().len() as u32 + 1
    }
}
