//! Export module for FinFlow
//!
//! CSV export of records and the monthly summary report.

pub mod csv;

pub use csv::{export_expenses, export_income, export_savings, export_summary};
