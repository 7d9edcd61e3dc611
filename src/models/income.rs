//! Income record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::IncomeId;
use super::money::Money;

/// A single income entry: salary, freelance payment, dividend, etc.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// Unique identifier
    pub id: IncomeId,

    /// Date the income was received
    pub date: NaiveDate,

    /// Where the money came from (employer, client, ...)
    pub source: String,

    /// Free-text category, e.g. "Salary", "Freelance", "Investment"
    pub category: String,

    /// Amount received (always positive)
    pub amount: Money,

    /// Payment method, e.g. "Bank Transfer"
    #[serde(default)]
    pub payment_method: String,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl IncomeRecord {
    /// Create a new income record
    pub fn new(
        date: NaiveDate,
        source: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: IncomeId::new(),
            date,
            source: source.into(),
            category: category.into(),
            amount,
            payment_method: String::new(),
            notes: String::new(),
        }
    }

    /// Set the payment method, builder style
    pub fn with_payment_method(mut self, payment_method: impl Into<String>) -> Self {
        self.payment_method = payment_method.into();
        self
    }

    /// Set the notes, builder style
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Validate the record before it enters the store
    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if self.source.trim().is_empty() {
            return Err(IncomeValidationError::EmptySource);
        }
        if !self.amount.is_positive() {
            return Err(IncomeValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for IncomeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.source,
            self.amount
        )
    }
}

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    EmptySource,
    NonPositiveAmount,
}

impl fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySource => write!(f, "Income source cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Income amount must be positive"),
        }
    }
}

impl std::error::Error for IncomeValidationError {}
