//! Reports module for FinFlow
//!
//! The financial computation engine: pure aggregation over ledger snapshots,
//! the health score, budget variance, debt payoff projection, goal progress,
//! and the monthly summary / year analysis.

pub mod aggregate;
pub mod budget_overview;
pub mod dashboard;
pub mod debt_payoff;
pub mod goal_progress;
pub mod health;
pub mod monthly_summary;

pub use aggregate::{top_category, total, total_by_category, total_by_kind};
pub use budget_overview::{BudgetOverviewReport, BudgetStatus, CategoryVarianceRow};
pub use dashboard::{DashboardReport, WeeklyPoint};
pub use debt_payoff::{months_to_payoff, DebtPayoffReport, DebtPayoffRow, Payoff};
pub use goal_progress::{GoalProgressReport, GoalProjection};
pub use health::health_score;
pub use monthly_summary::{MonthRow, MonthlySummaryReport, SummaryTotals, YearAnalysis};
