//! Savings service
//!
//! Besides the usual record lifecycle this service exposes the all-time
//! emergency-fund balance, which the health score and coverage calculations
//! consume unfiltered by period.

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Money, Period, SavingsId, SavingsRecord};
use crate::storage::Storage;

/// Service for savings record management
pub struct SavingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SavingsService<'a> {
    /// Create a new savings service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and append a new savings record
    pub fn add(&self, record: SavingsRecord) -> FinFlowResult<SavingsRecord> {
        record
            .validate()
            .map_err(|e| FinFlowError::Validation(e.to_string()))?;

        self.storage.savings.insert(record.clone())?;
        self.storage.savings.save()?;

        Ok(record)
    }

    /// All savings records
    pub fn list_all(&self) -> FinFlowResult<Vec<SavingsRecord>> {
        self.storage.savings.all()
    }

    /// Savings records within a period
    pub fn list_for_period(&self, period: Period) -> FinFlowResult<Vec<SavingsRecord>> {
        self.storage.savings.in_period(period)
    }

    /// All-time sum of deposits typed "Emergency Fund". Deliberately never
    /// period-filtered.
    pub fn emergency_fund_balance(&self) -> FinFlowResult<Money> {
        Ok(self
            .storage
            .savings
            .all()?
            .iter()
            .filter(|r| r.is_emergency_fund())
            .map(|r| r.amount)
            .sum())
    }

    /// Delete a savings record by ID
    pub fn delete(&self, id: SavingsId) -> FinFlowResult<SavingsRecord> {
        match self.storage.savings.delete(id)? {
            Some(removed) => {
                self.storage.savings.save()?;
                Ok(removed)
            }
            None => Err(FinFlowError::savings_not_found(id.to_string())),
        }
    }
}
