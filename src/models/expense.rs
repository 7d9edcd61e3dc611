//! Expense record model
//!
//! Every expense carries one of the twelve fixed categories plus a
//! fixed-or-variable flag used for the committed/discretionary split.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;
use super::ids::ExpenseId;
use super::money::Money;

/// Classifies an expense as recurring-committed or discretionary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseKind {
    Fixed,
    Variable,
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "Fixed"),
            Self::Variable => write!(f, "Variable"),
        }
    }
}

impl FromStr for ExpenseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            s if s.eq_ignore_ascii_case("fixed") => Ok(Self::Fixed),
            s if s.eq_ignore_ascii_case("variable") => Ok(Self::Variable),
            other => Err(format!("Expected 'Fixed' or 'Variable', got '{}'", other)),
        }
    }
}

/// A single expense entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Unique identifier
    pub id: ExpenseId,

    /// Date the expense occurred
    pub date: NaiveDate,

    /// One of the twelve fixed categories
    pub category: ExpenseCategory,

    /// Free-text subcategory, e.g. "Rent", "Groceries"
    #[serde(default)]
    pub subcategory: String,

    /// Amount spent (always positive)
    pub amount: Money,

    /// Payment method
    #[serde(default)]
    pub payment_method: String,

    /// Fixed or variable
    pub kind: ExpenseKind,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,
}

impl ExpenseRecord {
    /// Create a new expense record
    pub fn new(
        date: NaiveDate,
        category: ExpenseCategory,
        amount: Money,
        kind: ExpenseKind,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            date,
            category,
            subcategory: String::new(),
            amount,
            payment_method: String::new(),
            kind,
            notes: String::new(),
        }
    }

    /// Set the subcategory, builder style
    pub fn with_subcategory(mut self, subcategory: impl Into<String>) -> Self {
        self.subcategory = subcategory.into();
        self
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

    /// Check if this is a fixed (committed) expense
    pub fn is_fixed(&self) -> bool {
        self.kind == ExpenseKind::Fixed
    }

    /// Validate the record before it enters the store
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount);
        }
        Ok(())
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expense records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    NonPositiveAmount,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount => write!(f, "Expense amount must be positive"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
