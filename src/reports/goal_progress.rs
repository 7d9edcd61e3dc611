//! Goal progress projection
//!
//! Months remaining use a flat 30-day month rather than calendar months;
//! every "needed per month" figure is defined in those terms.

use chrono::NaiveDate;

use crate::error::FinFlowResult;
use crate::models::{Goal, GoalCategory, GoalId, Money};
use crate::storage::Storage;

/// Projection for one goal as of a given day
#[derive(Debug, Clone)]
pub struct GoalProjection {
    /// Goal ID
    pub id: GoalId,
    /// Goal name
    pub name: String,
    /// Goal category
    pub category: GoalCategory,
    /// Target amount
    pub target: Money,
    /// Saved so far
    pub saved: Money,
    /// Months until the target date (30-day months, floored at zero)
    pub months_remaining: u32,
    /// saved / target, capped at 1.0
    pub percent_complete: f64,
    /// Required monthly contribution; None when nothing more is needed or no
    /// time remains
    pub needed_per_month: Option<Money>,
    /// Whether saved covers the target
    pub achieved: bool,
}

/// Months between today and the target date, in 30-day months
pub fn months_remaining(target_date: NaiveDate, today: NaiveDate) -> u32 {
    let days = (target_date - today).num_days() as f64;
    let months = (days / 30.0).round();
    months.max(0.0) as u32
}

/// Project a goal's progress as of `today`
pub fn project(goal: &Goal, today: NaiveDate) -> GoalProjection {
    let months = months_remaining(goal.target_date, today);

    let percent_complete = (goal.saved.as_f64() / goal.target.as_f64()).min(1.0);

    let outstanding = goal.target - goal.saved;
    let needed_per_month = if months > 0 && outstanding.is_positive() {
        Some(Money::from_cents(
            (outstanding.cents() as f64 / months as f64).round() as i64,
        ))
    } else {
        None
    };

    GoalProjection {
        id: goal.id,
        name: goal.name.clone(),
        category: goal.category,
        target: goal.target,
        saved: goal.saved,
        months_remaining: months,
        percent_complete,
        needed_per_month,
        achieved: goal.is_achieved(),
    }
}

/// Progress projections for all stored goals
#[derive(Debug, Clone)]
pub struct GoalProgressReport {
    pub projections: Vec<GoalProjection>,
}

impl GoalProgressReport {
    /// Generate projections for every goal as of `today`
    pub fn generate(storage: &Storage, today: NaiveDate) -> FinFlowResult<Self> {
        let goals = storage.goals.all()?;
        Ok(Self {
            projections: goals.iter().map(|g| project(g, today)).collect(),
        })
    }
}
