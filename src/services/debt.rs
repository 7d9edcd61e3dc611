//! Debt service

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Debt, DebtId};
use crate::storage::Storage;

/// Service for debt management
pub struct DebtService<'a> {
    storage: &'a Storage,
}

impl<'a> DebtService<'a> {
    /// Create a new debt service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new debt
    pub fn add(&self, debt: Debt) -> FinFlowResult<Debt> {
        debt.validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;

        self.storage.debts.insert(debt.clone())?;
        self.storage.debts.save()?;

        Ok(debt)
    }

    /// All debts, in insertion order
    pub fn list_all(&self) -> FinFlowResult<Vec<Debt>> {
        self.storage.debts.all()
    }

    /// Delete a debt by ID
    pub fn delete(&self, id: DebtId) -> FinFlowResult<Debt> {
        match self.storage.debts.delete(id)? {
            Some(removed) => {
                self.storage.debts.save()?;
                Ok(removed)
            }
            None => Err(FinFlowError::debt_not_found(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinFlowPaths;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_add_and_list_preserves_insertion_order() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);

        service
            .add(Debt::new(
                "Credit Card",
                Money::from_units(2400),
                22.0,
                Money::from_units(50),
            ))
            .unwrap();
        service
            .add(Debt::new(
                "Student Loan",
                Money::from_units(18000),
                5.5,
                Money::from_units(210),
            ))
            .unwrap();

        let debts = service.list_all().unwrap();
        assert_eq!(debts.len(), 2);
        assert_eq!(debts[0].name, "Credit Card");
        assert_eq!(debts[1].name, "Student Loan");
    }

    #[test]
    fn test_negative_rate_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);

        let result = service.add(Debt::new(
            "Bad",
            Money::from_units(100),
            -5.0,
            Money::from_units(10),
        ));
        assert!(matches!(result, Err(FinFlowError::Validation(_))));
    }

    #[test]
    fn test_delete() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DebtService::new(&storage);

        let debt = service
            .add(Debt::new(
                "Loan",
                Money::from_units(1000),
                0.0,
                Money::from_units(100),
            ))
            .unwrap();

        service.delete(debt.id).unwrap();
        assert!(service.list_all().unwrap().is_empty());
    }
}
