//! Terminal display layer
//!
//! Formatting helpers plus `tabled`-based rendering of records and reports.

pub mod format;
pub mod tables;

pub use format::{format_amount, format_bar, format_rate, format_rate_or_dash, format_signed};
pub use tables::{
    budget_table, debt_table, expense_table, goals_table, income_table, savings_table,
    short_month, summary_table,
};
