//! Savings deposit model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SavingsId;
use super::money::Money;

/// Savings records with this type feed the emergency-fund balance used by the
/// health score and coverage calculations.
pub const EMERGENCY_FUND_TYPE: &str = "Emergency Fund";

/// A single savings deposit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRecord {
    /// Unique identifier
    pub id: SavingsId,

    /// Date of the deposit
    pub date: NaiveDate,

    /// Free-text savings type, e.g. "Emergency Fund", "Retirement"
    #[serde(rename = "type")]
    pub kind: String,

    /// Amount deposited (always positive)
    pub amount: Money,

    /// Destination account, e.g. "HYSA", "401(k)"
    #[serde(default)]
    pub account: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl SavingsRecord {
    /// Create a new savings record
    pub fn new(date: NaiveDate, kind: impl Into<String>, amount: Money) -> Self {
        Self {
            id: SavingsId::new(),
            date,
            kind: kind.into(),
            amount,
            account: String::new(),
            notes: String::new(),
        }
    }

    /// Set the account, builder style
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    /// Set the notes, builder style
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check whether this deposit counts toward the emergency fund
    pub fn is_emergency_fund(&self) -> bool {
        self.kind == EMERGENCY_FUND_TYPE
    }

    /// Validate the record before it enters the store
    pub fn validate(&self) -> Result<(), SavingsValidationError> {
        if self.kind.trim().is_empty() {
            return Err(SavingsValidationError::EmptyType);
        }
        if !self.amount.is_positive() {
            return Err(SavingsValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for SavingsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for savings records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavingsValidationError {
    EmptyType,
    NonPositiveAmount,
}

impl fmt::Display for SavingsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyType => write!(f, "Savings type cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Savings amount must be positive"),
        }
    }
}

impl std::error::Error for SavingsValidationError {}
