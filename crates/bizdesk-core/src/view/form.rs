//! Form Controller
//!
//! Holds the draft for one entity screen and turns it into a record on
//! submit. The collection is owned by the screen and passed in.

use std::marker::PhantomData;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{DomainError, Draft, Editable, FieldError};
use crate::repository::Repository;

/// What submitting while editing does with the original record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditPolicy {
    /// The record keeps its id and is replaced in place
    #[default]
    Replace,
    /// The record leaves the collection on `edit` and comes back as a new
    /// row with a `len + 1` id, which may collide with an existing one
    RemoveAndAppend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Created(u32),
    Updated(u32),
}

impl SubmitOutcome {
    pub fn id(self) -> u32 {
        match self {
            SubmitOutcome::Created(id) | SubmitOutcome::Updated(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormController<R: Editable> {
    draft: Draft,
    /// Id and row position of the record being edited
    editing: Option<(u32, usize)>,
    policy: EditPolicy,
    /// Stamped into computed date fields of every fresh draft
    today: Option<NaiveDate>,
    _record: PhantomData<R>,
}

impl<R: Editable> Default for FormController<R> {
    fn default() -> Self {
        Self::new(EditPolicy::default())
    }
}

impl<R: Editable> FormController<R> {
    pub fn new(policy: EditPolicy) -> Self {
        Self {
            draft: Draft::empty(R::fields()),
            editing: None,
            policy,
            today: None,
            _record: PhantomData,
        }
    }

    /// Date used for computed date fields such as "sent on"
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self.reset();
        self
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn get(&self, key: &str) -> &str {
        self.draft.get(key)
    }

    /// Update one draft value; unknown keys are ignored
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        self.draft.set(key, value)
    }

    /// Id of the record being edited, if any
    pub fn editing(&self) -> Option<u32> {
        self.editing.map(|(id, _)| id)
    }

    /// Row position of the record being edited
    pub fn editing_row(&self) -> Option<usize> {
        self.editing.map(|(_, row)| row)
    }

    pub fn policy(&self) -> EditPolicy {
        self.policy
    }

    pub fn validate(&self) -> Vec<FieldError> {
        self.draft.validate(R::fields())
    }

    /// Validate the draft and write it into `repo`.
    ///
    /// On any error both the collection and the draft are left as they were.
    pub fn submit(&mut self, repo: &mut impl Repository<R>) -> Result<SubmitOutcome, FormError> {
        let errors = self.validate();
        if !errors.is_empty() {
            debug!(entity = R::ENTITY, count = errors.len(), "submit rejected");
            return Err(FormError::Invalid(errors));
        }

        let outcome = match (self.editing, self.policy) {
            (Some((id, row)), EditPolicy::Replace) => {
                repo.update_at(row, R::from_draft(id, &self.draft))?;
                SubmitOutcome::Updated(id)
            }
            _ => {
                let id = repo.next_id();
                repo.create(R::from_draft(id, &self.draft))?;
                SubmitOutcome::Created(id)
            }
        };

        info!(entity = R::ENTITY, ?outcome, "form submitted");
        self.reset();
        Ok(outcome)
    }

    /// Load a record into the draft.
    ///
    /// Under `RemoveAndAppend` the record is taken out of `repo` right away.
    /// The row is found by value, so a record sharing its id with another
    /// row still edits the one that was picked.
    pub fn edit(&mut self, record: &R, repo: &mut impl Repository<R>) -> Result<(), FormError> {
        let row = repo
            .position_of(record)
            .ok_or_else(|| DomainError::NotFound(format!("{} {}", R::ENTITY, record.id())))?;
        if self.policy == EditPolicy::RemoveAndAppend {
            repo.delete_at(row)?;
        }
        self.draft = record.to_draft();
        self.editing = Some((record.id(), row));
        debug!(entity = R::ENTITY, id = record.id(), row, "editing record");
        Ok(())
    }

    /// Keep the edited row position in step after `row` left the collection.
    ///
    /// Returns `true` when the removed row was the one being edited, in
    /// which case the draft is discarded.
    pub fn row_removed(&mut self, row: usize) -> bool {
        match self.editing {
            Some((_, editing)) if editing == row && self.policy == EditPolicy::Replace => {
                self.reset();
                true
            }
            Some((id, editing)) if editing > row => {
                self.editing = Some((id, editing - 1));
                false
            }
            _ => false,
        }
    }

    /// Discard the draft; the collection is not touched
    pub fn cancel(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.draft = Draft::empty(R::fields());
        if let Some(today) = self.today {
            self.draft.stamp_dates(R::fields(), today);
        }
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{seed, Bank, FieldProblem, Product};
    use crate::repository::Collection;

    fn banks() -> Collection<Bank> {
        Collection::from(seed::banks())
    }

    #[test]
    fn test_submit_with_empty_name_changes_nothing() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();
        form.set("note", "draft note");

        let err = form.submit(&mut repo).unwrap_err();
        match err {
            FormError::Invalid(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].key, "name");
                assert_eq!(errors[0].problem, FieldProblem::Missing);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(repo.len(), 6);
        assert_eq!(form.get("note"), "draft note");
    }

    #[test]
    fn test_submit_appends_and_resets() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();
        form.set("name", "  Sonali Bank ");

        let outcome = form.submit(&mut repo).unwrap();
        assert_eq!(outcome, SubmitOutcome::Created(7));
        assert_eq!(repo.list()[6].name, "Sonali Bank");
        assert_eq!(form.get("name"), "");
    }

    #[test]
    fn test_edit_then_submit_replaces_in_place() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();
        let original = repo.find_by_id(3).cloned().unwrap();

        form.edit(&original, &mut repo).unwrap();
        assert_eq!(form.editing(), Some(3));
        assert_eq!(form.get("name"), "Islami Bank Ltd");

        form.set("name", "Islami Bank Bangladesh Ltd");
        assert_eq!(form.submit(&mut repo).unwrap(), SubmitOutcome::Updated(3));

        assert_eq!(repo.len(), 6);
        assert_eq!(repo.count_id(3), 1);
        assert_eq!(repo.list()[2].name, "Islami Bank Bangladesh Ltd");
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn test_remove_and_append_can_duplicate_ids() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::new(EditPolicy::RemoveAndAppend);
        let original = repo.find_by_id(2).cloned().unwrap();

        form.edit(&original, &mut repo).unwrap();
        assert_eq!(repo.len(), 5);

        let outcome = form.submit(&mut repo).unwrap();
        // len is back to 5 + 1, and bank 6 still exists
        assert_eq!(outcome, SubmitOutcome::Created(6));
        assert_eq!(repo.count_id(6), 2);
        assert_eq!(repo.list().last().map(|b| b.name.as_str()), Some("United Commercial Bank Ltd"));
    }

    #[test]
    fn test_editing_a_duplicate_id_replaces_only_that_row() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();
        let united = repo.find_by_id(2).cloned().unwrap();
        repo.delete_record(&united).unwrap();
        form.set("name", "Pubali Bank");
        assert_eq!(form.submit(&mut repo).unwrap(), SubmitOutcome::Created(6));

        let pubali = repo.list().last().cloned().unwrap();
        form.edit(&pubali, &mut repo).unwrap();
        assert_eq!(form.editing_row(), Some(5));
        form.set("name", "Pubali Bank PLC");
        assert_eq!(form.submit(&mut repo).unwrap(), SubmitOutcome::Updated(6));

        let names: Vec<&str> = repo.iter().filter(|b| b.id == 6).map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Janata Bank Ltd", "Pubali Bank PLC"]);
        assert_eq!(repo.len(), 6);
    }

    #[test]
    fn test_row_removed_tracks_the_edited_row() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();
        let brac = repo.find_by_id(5).cloned().unwrap();
        form.edit(&brac, &mut repo).unwrap();

        // a row above the edited one goes away
        repo.delete_at(0).unwrap();
        assert!(!form.row_removed(0));
        assert_eq!(form.editing_row(), Some(3));

        form.set("note", "Gulshan");
        form.submit(&mut repo).unwrap();
        assert_eq!(repo.list()[3].note, "Gulshan");

        form.edit(&repo.list()[3].clone(), &mut repo).unwrap();
        repo.delete_at(3).unwrap();
        assert!(form.row_removed(3));
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn test_edit_of_unknown_record_is_rejected() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();

        let err = form.edit(&Bank::new(3, "Not seeded", ""), &mut repo).unwrap_err();
        assert_eq!(err, FormError::Domain(DomainError::NotFound("Bank 3".to_string())));
        assert_eq!(form.editing(), None);
    }

    #[test]
    fn test_cancel_keeps_collection() {
        let mut repo = banks();
        let mut form = FormController::<Bank>::default();
        let original = repo.find_by_id(1).cloned().unwrap();

        form.edit(&original, &mut repo).unwrap();
        form.set("name", "Changed");
        form.cancel();

        assert_eq!(repo.find_by_id(1), Some(&original));
        assert_eq!(form.editing(), None);
        assert_eq!(form.get("name"), "");
    }

    #[test]
    fn test_number_fields_are_checked() {
        let mut repo = Collection::from(seed::products());
        let mut form = FormController::<Product>::default();
        form.set("product_name", "MTS- 3030");
        form.set("brand", "Sunca");
        form.set("category", "Plug");
        form.set("cost_price", "cheap");

        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "Cost Price must be a number");
        assert!(form.submit(&mut repo).is_err());

        form.set("cost_price", "120");
        assert_eq!(form.submit(&mut repo).unwrap().id(), 11);
        assert_eq!(repo.find_by_id(11).map(|p| p.cost_price), Some(120.0));
    }
}
