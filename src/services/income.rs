//! Income service
//!
//! Validated append, listing, and deletion of income records. Rejected
//! records never reach the store.

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{IncomeId, IncomeRecord, Period};
use crate::storage::Storage;

/// Service for income record management
pub struct IncomeService<'a> {
    storage: &'a Storage,
}

impl<'a> IncomeService<'a> {
    /// Create a new income service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new income record
    pub fn add(&self, record: IncomeRecord) -> FinFlowResult<IncomeRecord> {
        record
            .validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;

        self.storage.income.insert(record.clone())?;
        self.storage.income.save()?;

        Ok(record)
    }

    /// All income records
    pub fn list_all(&self) -> FinFlowResult<Vec<IncomeRecord>> {
        self.storage.income.all()
    }

    /// Income records within a period
    pub fn list_for_period(&self, period: Period) -> FinFlowResult<Vec<IncomeRecord>> {
        self.storage.income.in_period(period)
    }

    /// Delete an income record by ID
    pub fn delete(&self, id: IncomeId) -> FinFlowResult<IncomeRecord> {
        match self.storage.income.delete(id)? {
            Some(removed) => {
                self.storage.income.save()?;
                Ok(removed)
            }
            None => Err(FinFlowError::income_not_found(id.to_string())),
        }
    }
}
