//! In-memory Collection
//!
//! An ordered `Vec` of records owned by one screen. Nothing survives a
//! reload.

use tracing::{debug, warn};

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Record> {
    records: Vec<T>,
}

impl<T: Record> Default for Collection<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

impl<T: Record> From<Vec<T>> for Collection<T> {
    fn from(records: Vec<T>) -> Self {
        Self { records }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records sharing `id`; the `len + 1` allocator can produce
    /// duplicates after a delete
    pub fn count_id(&self, id: u32) -> usize {
        self.records.iter().filter(|r| r.id() == id).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.iter()
    }
}

impl<T: Record> Repository<T> for Collection<T> {
    fn create(&mut self, record: T) -> DomainResult<T> {
        debug!(entity = T::ENTITY, id = record.id(), "record created");
        self.records.push(record.clone());
        Ok(record)
    }

    fn find_by_id(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    fn list(&self) -> &[T] {
        &self.records
    }

    fn update_at(&mut self, index: usize, record: T) -> DomainResult<T> {
        let id = record.id();
        let len = self.records.len();
        let slot = self.records.get_mut(index).ok_or_else(|| {
            warn!(entity = T::ENTITY, index, len, "update past the end");
            DomainError::InvalidInput(format!("row {} of {} {} rows", index + 1, len, T::ENTITY))
        })?;
        if slot.id() != id {
            warn!(entity = T::ENTITY, id, index, found = slot.id(), "row no longer holds the record");
            return Err(DomainError::NotFound(format!("{} {}", T::ENTITY, id)));
        }
        *slot = record.clone();
        debug!(entity = T::ENTITY, id, index, "record updated");
        Ok(record)
    }

    fn delete_at(&mut self, index: usize) -> DomainResult<T> {
        if index >= self.records.len() {
            return Err(DomainError::InvalidInput(format!(
                "row {} of {} {} rows",
                index + 1,
                self.records.len(),
                T::ENTITY
            )));
        }
        let removed = self.records.remove(index);
        debug!(entity = T::ENTITY, id = removed.id(), index, "record deleted");
        Ok(removed)
    }
}
