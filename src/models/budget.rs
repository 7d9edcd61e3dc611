//! Monthly budget plan
//!
//! Maps each expense category to a monthly limit. A zero limit means "no
//! budget set" for that category; the variance report classifies such
//! categories as `NoBudget` whatever the actual spend is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::category::ExpenseCategory;
use super::money::Money;

/// Category-to-limit mapping for monthly budgets
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPlan {
    #[serde(default)]
    limits: BTreeMap<ExpenseCategory, Money>,
}

impl BudgetPlan {
    /// Create an empty plan (no budgets set)
    pub fn new() -> Self {
        Self::default()
    }

    /// The monthly limit for a category, zero when unset
    pub fn limit(&self, category: ExpenseCategory) -> Money {
        self.limits.get(&category).copied().unwrap_or_default()
    }

    /// Set the monthly limit for a category. A zero or negative amount clears
    /// the budget for that category.
    pub fn set_limit(&mut self, category: ExpenseCategory, limit: Money) {
        if limit.is_positive() {
            self.limits.insert(category, limit);
        } else {
            self.limits.remove(&category);
        }
    }

    /// Check if a category has a budget set
    pub fn has_budget(&self, category: ExpenseCategory) -> bool {
        self.limit(category).is_positive()
    }

    /// Sum of all configured limits
    pub fn total_limit(&self) -> Money {
        self.limits.values().copied().sum()
    }

    /// Check if no budgets are set at all
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty()
    }

    /// Iterate over categories with a configured limit
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Money)> + '_ {
        self.limits.iter().map(|(c, m)| (*c, *m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_limit_is_zero() {
        let plan = BudgetPlan::new();
        assert!(plan.limit(ExpenseCategory::Housing).is_zero());
        assert!(!plan.has_budget(ExpenseCategory::Housing));
    }

    #[test]
    fn test_set_and_total() {
        let mut plan = BudgetPlan::new();
        plan.set_limit(ExpenseCategory::Housing, Money::from_units(1200));
        plan.set_limit(ExpenseCategory::Food, Money::from_units(350));

        assert_eq!(plan.limit(ExpenseCategory::Housing).cents(), 120000);
        assert_eq!(plan.total_limit().cents(), 155000);
        assert!(plan.has_budget(ExpenseCategory::Food));
    }

    #[test]
    fn test_zero_clears_budget() {
        let mut plan = BudgetPlan::new();
        plan.set_limit(ExpenseCategory::Food, Money::from_units(350));
        plan.set_limit(ExpenseCategory::Food, Money::zero());

        assert!(plan.is_empty());
        assert!(!plan.has_budget(ExpenseCategory::Food));
    }

    #[test]
    fn test_serialization() {
        let mut plan = BudgetPlan::new();
        plan.set_limit(ExpenseCategory::PersonalCare, Money::from_units(50));

        let json = serde_json::to_string(&plan).unwrap();
        assert!(json.contains("Personal Care"));

        let deserialized: BudgetPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, deserialized);
    }
}
