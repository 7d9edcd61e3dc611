//! Budget variance report
//!
//! Compares per-category actual spend against the configured monthly limits
//! and classifies each category's status.

use std::fmt;

use crate::error::FinFlowResult;
use crate::models::{ExpenseCategory, Money, Period};
use crate::storage::Storage;

use super::aggregate::total_by_category;

/// Budget status for one category, in classification priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// No limit configured for this category
    NoBudget,
    /// Spending exceeds the limit
    Over,
    /// Spending is above 85% of the limit
    Warning,
    /// Spending is within the limit
    Ok,
}

impl BudgetStatus {
    /// Status label shown in reports
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoBudget => "No Budget",
            Self::Over => "Over",
            Self::Warning => "Warning",
            Self::Ok => "OK",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Fraction of the limit consumed by actual spend
///
/// With no limit set, reports 1.0 when anything was spent and 0.0 otherwise,
/// so progress bars saturate instead of dividing by zero.
pub fn utilization(limit: Money, actual: Money) -> f64 {
    if limit.is_positive() {
        actual.as_f64() / limit.as_f64()
    } else if actual.is_positive() {
        1.0
    } else {
        0.0
    }
}

/// Classify a category's budget status
pub fn classify(limit: Money, utilization: f64) -> BudgetStatus {
    if limit.is_zero() {
        BudgetStatus::NoBudget
    } else if utilization > 1.0 {
        BudgetStatus::Over
    } else if utilization > 0.85 {
        BudgetStatus::Warning
    } else {
        BudgetStatus::Ok
    }
}

/// Variance data for one category
#[derive(Debug, Clone)]
pub struct CategoryVarianceRow {
    /// The category
    pub category: ExpenseCategory,
    /// Configured monthly limit (zero when unset)
    pub limit: Money,
    /// Actual spend in the period
    pub actual: Money,
    /// actual - limit; positive means overspent
    pub variance: Money,
    /// actual / limit (see [`utilization`])
    pub utilization: f64,
    /// Classified status
    pub status: BudgetStatus,
}

/// Budget overview for one period: all twelve categories plus derived totals
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// The period the actuals were filtered to
    pub period: Period,
    /// One row per category, in budget-table order
    pub rows: Vec<CategoryVarianceRow>,
    /// Sum of configured limits
    pub total_limit: Money,
    /// Sum of actual spend
    pub total_actual: Money,
    /// total_actual - total_limit
    pub total_variance: Money,
    /// max(0, total_limit - total_actual)
    pub remaining: Money,
}

impl BudgetOverviewReport {
    /// Generate the budget overview for a period
    pub fn generate(storage: &Storage, period: Period) -> FinFlowResult<Self> {
        let plan = storage.budgets.plan()?;
        let expenses = storage.expenses.in_period(period)?;
        let actuals = total_by_category(&expenses);

        let mut rows = Vec::with_capacity(ExpenseCategory::ALL.len());
        let mut total_limit = Money::zero();
        let mut total_actual = Money::zero();

        for category in ExpenseCategory::ALL {
            let limit = plan.limit(category);
            let actual = actuals.get(&category).copied().unwrap_or_default();
            let used = utilization(limit, actual);

            total_limit += limit;
            total_actual += actual;

            rows.push(CategoryVarianceRow {
                category,
                limit,
                actual,
                variance: actual - limit,
                utilization: used,
                status: classify(limit, used),
            });
        }

        let total_variance = total_actual - total_limit;
        let remaining = std::cmp::max(Money::zero(), total_limit - total_actual);

        Ok(Self {
            period,
            rows,
            total_limit,
            total_actual,
            total_variance,
            remaining,
        })
    }

    /// Rows classified as over budget
    pub fn over_budget(&self) -> impl Iterator<Item = &CategoryVarianceRow> {
        self.rows
            .iter()
            .filter(|r| r.status == BudgetStatus::Over)
    }
}
