//! Budget plan repository
//!
//! Persists the category-to-limit mapping to its own JSON file.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FinFlowError;
use crate::models::{BudgetPlan, ExpenseCategory, Money};

use super::file_io::{read_json, write_json_atomic};

/// Repository for the monthly budget plan
pub struct BudgetRepository {
    path: PathBuf,
    plan: RwLock<BudgetPlan>,
}

impl BudgetRepository {
    /// Create a new repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            plan: RwLock::new(BudgetPlan::new()),
        }
    }

    /// Load the plan from disk
    pub fn load(&self) -> Result<(), FinFlowError> {
        let file_data: BudgetPlan = read_json(&self.path)?;

        let mut plan = self
            .plan
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *plan = file_data;
        Ok(())
    }

    /// Save the plan to disk
    pub fn save(&self) -> Result<(), FinFlowError> {
        let plan = self
            .plan
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*plan)
    }

    /// Snapshot of the current plan
    pub fn plan(&self) -> Result<BudgetPlan, FinFlowError> {
        let plan = self
            .plan
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(plan.clone())
    }

    /// Set the limit for one category
    pub fn set_limit(&self, category: ExpenseCategory, limit: Money) -> Result<(), FinFlowError> {
        let mut plan = self
            .plan
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        plan.set_limit(category, limit);
        Ok(())
    }

    /// Replace the whole plan
    pub fn replace(&self, new_plan: BudgetPlan) -> Result<(), FinFlowError> {
        let mut plan = self
            .plan
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *plan = new_plan;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_read_limit() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));

        repo.set_limit(ExpenseCategory::Housing, Money::from_units(1200))
            .unwrap();

        let plan = repo.plan().unwrap();
        assert_eq!(plan.limit(ExpenseCategory::Housing).cents(), 120000);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");

        {
            let repo = BudgetRepository::new(path.clone());
            repo.set_limit(ExpenseCategory::Food, Money::from_units(350))
                .unwrap();
            repo.save().unwrap();
        }

        {
            let repo = BudgetRepository::new(path);
            repo.load().unwrap();
            let plan = repo.plan().unwrap();
            assert_eq!(plan.limit(ExpenseCategory::Food).cents(), 35000);
        }
    }
}
