//! Business logic layer
//!
//! Services own the record lifecycle: validated appends that never mutate the
//! store on rejection, listing, and deletion by ID. All calculation lives in
//! `reports`.

pub mod budget;
pub mod debt;
pub mod expense;
pub mod goal;
pub mod income;
pub mod savings;

pub use budget::BudgetService;
pub use debt::DebtService;
pub use expense::ExpenseService;
pub use goal::GoalService;
pub use income::IncomeService;
pub use savings::SavingsService;
