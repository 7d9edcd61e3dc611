//! Core data models for FinFlow
//!
//! This module contains all the data structures that represent the ledger
//! domain: income, expenses, savings, goals, debts, budgets, and periods.

pub mod budget;
pub mod category;
pub mod debt;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod period;
pub mod savings;

pub use budget::BudgetPlan;
pub use category::{ExpenseCategory, GoalCategory};
pub use debt::Debt;
pub use expense::{ExpenseKind, ExpenseRecord};
pub use goal::Goal;
pub use ids::{DebtId, ExpenseId, GoalId, IncomeId, SavingsId};
pub use income::IncomeRecord;
pub use money::Money;
pub use period::{Period, MONTH_NAMES, SHORT_MONTHS};
pub use savings::{SavingsRecord, EMERGENCY_FUND_TYPE};
