//! Generic record store
//!
//! The five record collections share the same shape: a JSON-backed list of
//! uniquely-identified records supporting append, delete-by-id, and period
//! queries. One generic store covers them all.

use std::fmt;
use std::path::PathBuf;
use std::sync::RwLock;

use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::FinFlowError;
use crate::models::{Debt, ExpenseRecord, Goal, IncomeRecord, Period, SavingsRecord};

use super::file_io::{read_json, write_json_atomic};

/// A record that lives in a [`RecordStore`]
pub trait StoredRecord: Clone + Serialize + DeserializeOwned {
    /// ID type for this record collection
    type Id: Copy + Eq + fmt::Display;

    fn id(&self) -> Self::Id;
}

/// A stored record carrying a calendar date, enabling period queries
pub trait DatedRecord: StoredRecord {
    fn date(&self) -> NaiveDate;
}

impl StoredRecord for IncomeRecord {
    type Id = crate::models::IncomeId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DatedRecord for IncomeRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl StoredRecord for ExpenseRecord {
    type Id = crate::models::ExpenseId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DatedRecord for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl StoredRecord for SavingsRecord {
    type Id = crate::models::SavingsId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DatedRecord for SavingsRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl StoredRecord for Goal {
    type Id = crate::models::GoalId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl StoredRecord for Debt {
    type Id = crate::models::DebtId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// On-disk wrapper so the JSON file is an object, not a bare array
#[derive(Serialize, Deserialize)]
struct RecordData<T> {
    #[serde(default = "Vec::new")]
    records: Vec<T>,
}

impl<T> Default for RecordData<T> {
    fn default() -> Self {
        Self { records: Vec::new() }
    }
}

/// JSON-backed store for one record collection
pub struct RecordStore<T: StoredRecord> {
    path: PathBuf,
    records: RwLock<Vec<T>>,
}

impl<T: StoredRecord> RecordStore<T> {
    /// Create a new store backed by the given file
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Load records from disk
    pub fn load(&self) -> Result<(), FinFlowError> {
        let file_data: RecordData<T> = read_json(&self.path)?;

        let mut records = self
            .records
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *records = file_data.records;
        Ok(())
    }

    /// Save records to disk
    pub fn save(&self) -> Result<(), FinFlowError> {
        let records = self
            .records
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = RecordData {
            records: records.clone(),
        };

        write_json_atomic(&self.path, &file_data)
    }

    /// Snapshot of all records, in insertion order
    pub fn all(&self) -> Result<Vec<T>, FinFlowError> {
        let records = self
            .records
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.clone())
    }

    /// Look up a record by ID
    pub fn get(&self, id: T::Id) -> Result<Option<T>, FinFlowError> {
        let records = self
            .records
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.iter().find(|r| r.id() == id).cloned())
    }

    /// Append a record
    pub fn insert(&self, record: T) -> Result<(), FinFlowError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        records.push(record);
        Ok(())
    }

    /// Replace a record in place, matching by ID. Returns false if absent.
    pub fn update(&self, record: T) -> Result<bool, FinFlowError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Delete a record by ID, returning it if present
    pub fn delete(&self, id: T::Id) -> Result<Option<T>, FinFlowError> {
        let mut records = self
            .records
            .write()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        match records.iter().position(|r| r.id() == id) {
            Some(pos) => Ok(Some(records.remove(pos))),
            None => Ok(None),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> Result<usize, FinFlowError> {
        let records = self
            .records
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records.len())
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> Result<bool, FinFlowError> {
        Ok(self.len()? == 0)
    }
}

impl<T: DatedRecord> RecordStore<T> {
    /// Records whose date falls within the given period. An empty result is a
    /// valid outcome, not an error.
    pub fn in_period(&self, period: Period) -> Result<Vec<T>, FinFlowError> {
        let records = self
            .records
            .read()
            .map_err(|e| FinFlowError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(records
            .iter()
            .filter(|r| period.contains(r.date()))
            .cloned()
            .collect())
    }
}
