//! Budget CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{budget_table, format_amount};
use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{ExpenseCategory, Period};
use crate::reports::BudgetOverviewReport;
use crate::services::BudgetService;
use crate::storage::Storage;

use super::common::{parse_amount, parse_period_or_current_month};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category (0 clears it)
    Set {
        /// Category, one of the twelve fixed categories
        category: String,
        /// Monthly limit, e.g. "350" (0 clears the budget)
        amount: String,
    },
    /// Show the budget vs actual overview for a period
    Show {
        /// Period ("YYYY-MM" or "YYYY"), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinFlowResult<()> {
    match cmd {
        BudgetCommands::Set { category, amount } => {
            let category: ExpenseCategory = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    FinFlowError::Validation(e.to_string())
                })?;
            let amount = parse_amount(&amount)?;

            BudgetService::new(storage).set_limit(category, amount)?;

            if amount.is_positive() {
                println!(
                    "Set {} budget to {}/month",
                    category,
                    format_amount(amount, &settings.currency_symbol)
                );
            } else {
                println!("Cleared {} budget", category);
            }
        }

        BudgetCommands::Show { period } => {
            let period = parse_period_or_current_month(period.as_deref())?;
            print_budget_overview(storage, settings, period)?;
        }
    }

    Ok(())
}

/// Print the budget overview for a period
pub fn print_budget_overview(
    storage: &Storage,
    settings: &Settings,
    period: Period,
) -> FinFlowResult<()> {
    let report = BudgetOverviewReport::generate(storage, period)?;

    println!("Budget Plan: {}", period.label());
    println!("{}", budget_table(&report, settings));

    let over_count = report.over_budget().count();
    if over_count > 0 {
        println!("⚠ {} category/categories over budget.", over_count);
    }

    Ok(())
}
