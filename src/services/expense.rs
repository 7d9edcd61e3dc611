//! Expense service

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{ExpenseId, ExpenseRecord, Period};
use crate::storage::Storage;

/// Service for expense record management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new expense record
    pub fn add(&self, record: ExpenseRecord) -> FinFlowResult<ExpenseRecord> {
        record
            .validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;

        self.storage.expenses.insert(record.clone())?;
        self.storage.expenses.save()?;

        Ok(record)
    }

    /// All expense records
    pub fn list_all(&self) -> FinFlowResult<Vec<ExpenseRecord>> {
        self.storage.expenses.all()
    }

    /// Expense records within a period
    pub fn list_for_period(&self, period: Period) -> FinFlowResult<Vec<ExpenseRecord>> {
        self.storage.expenses.in_period(period)
    }

    /// Delete an expense record by ID
    pub fn delete(&self, id: ExpenseId) -> FinFlowResult<ExpenseRecord> {
        match self.storage.expenses.delete(id)? {
            Some(removed) => {
                self.storage.expenses.save()?;
                Ok(removed)
            }
            None => Err(FinFlowError::expense_not_found(id.to_string())),
        }
    }
}
