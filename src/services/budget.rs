//! Budget service
//!
//! Manages the category-to-limit plan. Setting a limit to zero clears the
//! budget for that category ("no budget set" is distinct from an enforced
//! zero only in that nothing is classified against it).

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{BudgetPlan, ExpenseCategory, Money};
use crate::storage::Storage;

/// Service for budget plan management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Current plan snapshot
    pub fn plan(&self) -> FinFlowResult<BudgetPlan> {
        self.storage.budgets.plan()
    }

    /// Set the monthly limit for a category
    pub fn set_limit(&self, category: ExpenseCategory, limit: Money) -> FinFlowResult<()> {
        if limit.is_negative() {
            return Err(FinFlowError::Validation(
                "Budget limit cannot be negative".into(),
            ));
        }

        self.storage.budgets.set_limit(category, limit)?;
        self.storage.budgets.save()?;
        Ok(())
    }

    /// Replace the whole plan at once
    pub fn replace_plan(&self, plan: BudgetPlan) -> FinFlowResult<()> {
        self.storage.budgets.replace(plan)?;
        self.storage.budgets.save()?;
        Ok(())
    }
}
