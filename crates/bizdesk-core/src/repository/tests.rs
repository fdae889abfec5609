//! Repository Integration Tests
//!
//! Tests for Collection against the seeded sample data.

#[cfg(test)]
mod tests {
    use crate::domain::{seed, Bank, DomainError};
    use crate::repository::{Collection, Repository};

    fn setup_banks() -> Collection<Bank> {
        Collection::from(seed::banks())
    }

    #[test]
    fn test_create_bank() {
        let mut repo = setup_banks();

        let id = repo.next_id();
        let created = repo.create(Bank::new(id, "Sonali Bank", "")).expect("Failed to create");

        assert_eq!(created.id, 7);
        assert_eq!(repo.len(), 7);
        assert_eq!(repo.list().last(), Some(&created));
    }

    #[test]
    fn test_find_by_id() {
        let repo = setup_banks();

        let found = repo.find_by_id(5);
        assert_eq!(found.map(|b| b.name.as_str()), Some("Brac Bank"));
        assert!(repo.find_by_id(42).is_none());
    }

    #[test]
    fn test_update_bank() {
        let mut repo = setup_banks();

        let mut bank = repo.find_by_id(2).cloned().expect("seeded bank");
        bank.note = "Head office".to_string();

        repo.update_at(1, bank).expect("Update failed");
        assert_eq!(repo.find_by_id(2).map(|b| b.note.as_str()), Some("Head office"));
        assert_eq!(repo.len(), 6);
    }

    #[test]
    fn test_update_wrong_row_is_not_found() {
        let mut repo = setup_banks();

        let err = repo.update_at(0, Bank::new(99, "Ghost", "")).unwrap_err();
        assert_eq!(err, DomainError::NotFound("Bank 99".to_string()));
        assert_eq!(err.to_string(), "Not found: Bank 99");
        assert_eq!(repo.list()[0].name, "Uttara Bank Ltd");
    }

    #[test]
    fn test_row_past_the_end_is_invalid_input() {
        let mut repo = setup_banks();

        let err = repo.update_at(6, Bank::new(7, "Ghost", "")).unwrap_err();
        assert_eq!(err, DomainError::InvalidInput("row 7 of 6 Bank rows".to_string()));
        assert_eq!(err.to_string(), "Invalid input: row 7 of 6 Bank rows");
        assert!(matches!(repo.delete_at(6), Err(DomainError::InvalidInput(_))));
        assert_eq!(repo.len(), 6);
    }

    #[test]
    fn test_delete_bank() {
        let mut repo = setup_banks();

        let first = repo.list()[0].clone();
        let removed = repo.delete_record(&first).expect("Delete failed");
        assert_eq!(removed.name, "Uttara Bank Ltd");
        assert!(repo.find_by_id(1).is_none());
        assert!(repo.delete_record(&first).is_err());
    }

    #[test]
    fn test_next_id_reuses_after_delete() {
        let mut repo = setup_banks();

        repo.delete_at(1).unwrap();
        let id = repo.next_id();
        assert_eq!(id, 6);
        repo.create(Bank::new(id, "Pubali Bank", "")).unwrap();

        // the allocator only looks at the length
        assert_eq!(repo.count_id(6), 2);
    }

    #[test]
    fn test_duplicate_ids_are_addressed_by_row() {
        let mut repo = setup_banks();
        repo.delete_at(1).unwrap();
        repo.create(Bank::new(6, "Pubali Bank", "")).unwrap();

        let pubali = repo.list()[5].clone();
        assert_eq!(repo.position_of(&pubali), Some(5));

        repo.update_at(5, Bank::new(6, "Pubali Bank PLC", "")).unwrap();
        assert_eq!(repo.list()[4].name, "Janata Bank Ltd");
        assert_eq!(repo.list()[5].name, "Pubali Bank PLC");

        let renamed = repo.list()[5].clone();
        repo.delete_record(&renamed).unwrap();
        assert_eq!(repo.count_id(6), 1);
        assert_eq!(repo.find_by_id(6).map(|b| b.name.as_str()), Some("Janata Bank Ltd"));
    }
}
