//! Storage layer for FinFlow
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation. Each record collection persists to its own file under the data
//! directory; the engine always reads fully-loaded in-memory snapshots.

pub mod budgets;
pub mod file_io;
pub mod records;

pub use budgets::BudgetRepository;
pub use file_io::{read_json, write_json_atomic};
pub use records::{DatedRecord, RecordStore, StoredRecord};

use crate::config::paths::FinFlowPaths;
use crate::error::FinFlowError;
use crate::models::{Debt, ExpenseRecord, Goal, IncomeRecord, SavingsRecord};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FinFlowPaths,
    pub income: RecordStore<IncomeRecord>,
    pub expenses: RecordStore<ExpenseRecord>,
    pub savings: RecordStore<SavingsRecord>,
    pub goals: RecordStore<Goal>,
    pub debts: RecordStore<Debt>,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FinFlowPaths) -> Result<Self, FinFlowError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            income: RecordStore::new(paths.income_file()),
            expenses: RecordStore::new(paths.expenses_file()),
            savings: RecordStore::new(paths.savings_file()),
            goals: RecordStore::new(paths.goals_file()),
            debts: RecordStore::new(paths.debts_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FinFlowPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), FinFlowError> {
        self.income.load()?;
        self.expenses.load()?;
        self.savings.load()?;
        self.goals.load()?;
        self.debts.load()?;
        self.budgets.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), FinFlowError> {
        self.income.save()?;
        self.expenses.save()?;
        self.savings.save()?;
        self.goals.save()?;
        self.debts.save()?;
        self.budgets.save()?;
        Ok(())
    }

    /// Check if any ledger data exists yet
    pub fn has_any_records(&self) -> Result<bool, FinFlowError> {
        Ok(!self.income.is_empty()? || !self.expenses.is_empty()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        storage.load_all().unwrap();
        assert!(!storage.has_any_records().unwrap());
    }

    #[test]
    fn test_save_all_creates_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        storage.save_all().unwrap();

        assert!(temp_dir.path().join("data").join("income.json").exists());
        assert!(temp_dir.path().join("data").join("debts.json").exists());
        assert!(temp_dir.path().join("data").join("budgets.json").exists());
    }
}
