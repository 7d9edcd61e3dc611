//! Financial goal model
//!
//! A goal tracks a target amount against an explicitly re-entered saved
//! amount. The saved amount is never derived from savings records; users
//! update it directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::GoalCategory;
use super::ids::GoalId;
use super::money::Money;

/// A financial goal with a target amount and date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Unique identifier
    pub id: GoalId,

    /// Goal name, e.g. "Summer Vacation"
    pub name: String,

    /// Target amount (always positive)
    pub target: Money,

    /// Amount saved so far; may exceed the target
    #[serde(default)]
    pub saved: Money,

    /// Date the goal should be reached by
    pub target_date: NaiveDate,

    /// Goal category
    pub category: GoalCategory,
}

impl Goal {
    /// Create a new goal
    pub fn new(
        name: impl Into<String>,
        target: Money,
        target_date: NaiveDate,
        category: GoalCategory,
    ) -> Self {
        Self {
            id: GoalId::new(),
            name: name.into(),
            target,
            saved: Money::zero(),
            target_date,
            category,
        }
    }

    /// Set the saved amount, builder style
    pub fn with_saved(mut self, saved: Money) -> Self {
        self.saved = saved;
        self
    }

    /// Update the saved amount (explicit re-entry)
    pub fn set_saved(&mut self, saved: Money) {
        self.saved = saved;
    }

    /// A goal is achieved once saved covers the target, regardless of the
    /// target date
    pub fn is_achieved(&self) -> bool {
        self.saved >= self.target
    }

    /// Validate the goal before it enters the store
    pub fn validate(&self) -> Result<(), GoalValidationError> {
        if self.name.trim().is_empty() {
            return Err(GoalValidationError::EmptyName);
        }
        if !self.target.is_positive() {
            return Err(GoalValidationError::NonPositiveTarget);
        }
        if self.saved.is_negative() {
            return Err(GoalValidationError::NegativeSaved);
        }
        Ok(())
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} / {})", self.name, self.saved, self.target)
    }
}

/// Validation errors for goals
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalValidationError {
    EmptyName,
    NonPositiveTarget,
    NegativeSaved,
}

impl fmt::Display for GoalValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Goal name cannot be empty"),
            Self::NonPositiveTarget => write!(f, "Goal target must be positive"),
            Self::NegativeSaved => write!(f, "Saved amount cannot be negative"),
        }
    }
}

impl std::error::Error for GoalValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    }

    #[test]
    fn test_new_goal() {
        let goal = Goal::new(
            "Emergency Fund",
            Money::from_units(15000),
            test_date(),
            GoalCategory::EmergencyFund,
        )
        .with_saved(Money::from_units(8500));

        assert_eq!(goal.target.cents(), 1_500_000);
        assert_eq!(goal.saved.cents(), 850_000);
        assert!(!goal.is_achieved());
        assert!(goal.validate().is_ok());
    }

    #[test]
    fn test_achieved_when_saved_reaches_target() {
        let mut goal = Goal::new(
            "Laptop",
            Money::from_units(2000),
            test_date(),
            GoalCategory::Other,
        );
        assert!(!goal.is_achieved());

        goal.set_saved(Money::from_units(2000));
        assert!(goal.is_achieved());

        // Overshooting still counts as achieved
        goal.set_saved(Money::from_units(3000));
        assert!(goal.is_achieved());
    }

    #[test]
    fn test_validation() {
        let unnamed = Goal::new("", Money::from_units(100), test_date(), GoalCategory::Other);
        assert_eq!(unnamed.validate(), Err(GoalValidationError::EmptyName));

        let zero_target = Goal::new("G", Money::zero(), test_date(), GoalCategory::Other);
        assert_eq!(
            zero_target.validate(),
            Err(GoalValidationError::NonPositiveTarget)
        );

        let negative_saved = Goal::new("G", Money::from_units(100), test_date(), GoalCategory::Other)
            .with_saved(Money::from_cents(-1));
        assert_eq!(
            negative_saved.validate(),
            Err(GoalValidationError::NegativeSaved)
        );
    }

    #[test]
    fn test_serialization() {
        let goal = Goal::new(
            "Vacation",
            Money::from_units(3000),
            test_date(),
            GoalCategory::Vacation,
        );
        let json = serde_json::to_string(&goal).unwrap();
        let deserialized: Goal = serde_json::from_str(&json).unwrap();
        assert_eq!(goal.id, deserialized.id);
        assert_eq!(goal.target, deserialized.target);
        assert_eq!(goal.category, deserialized.category);
    }
}
