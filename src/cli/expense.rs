//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{expense_table, format_amount};
use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{ExpenseCategory, ExpenseId, ExpenseKind, ExpenseRecord};
use crate::reports::{total, total_by_kind};
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::common::{parse_amount, parse_date_or_today, parse_period_or_current_month};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add an expense record
    Add {
        /// Category, one of the twelve fixed categories
        category: String,
        /// Amount, e.g. "45" or "45.00"
        amount: String,
        /// Fixed or Variable
        #[arg(short, long, default_value = "Variable")]
        kind: String,
        /// Subcategory, e.g. "Rent", "Groceries"
        #[arg(short, long)]
        subcategory: Option<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Payment method
        #[arg(short, long)]
        payment: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List expense records for a period
    List {
        /// Period ("YYYY-MM" or "YYYY"), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// List the valid expense categories
    Categories,
    /// Delete an expense record by ID
    Delete {
        /// Record ID (full UUID or "exp-" short form)
        id: ExpenseId,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> FinFlowResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            kind,
            subcategory,
            date,
            payment,
            notes,
        } => {
            let category: ExpenseCategory = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    FinFlowError::Validation(e.to_string())
                })?;
            let kind: ExpenseKind = kind.parse().map_err(FinFlowError::Validation)?;

            let record = ExpenseRecord::new(
                parse_date_or_today(date.as_deref())?,
                category,
                parse_amount(&amount)?,
                kind,
            )
            .with_subcategory(subcategory.unwrap_or_default())
            .with_payment_method(payment.unwrap_or_default())
            .with_notes(notes.unwrap_or_default());

            let record = service.add(record)?;
            println!(
                "Added {} expense {} in {} ({})",
                record.kind,
                format_amount(record.amount, &settings.currency_symbol),
                record.category,
                record.id
            );
        }

        ExpenseCommands::List { period } => {
            let period = parse_period_or_current_month(period.as_deref())?;
            let mut records = service.list_for_period(period)?;
            records.sort_by(|a, b| b.date.cmp(&a.date));

            if records.is_empty() {
                println!("No expense records for {}.", period.label());
                return Ok(());
            }

            let symbol = &settings.currency_symbol;
            let grand_total = total(&records);
            let fixed = total_by_kind(&records, ExpenseKind::Fixed);

            println!("Expenses: {}", period.label());
            println!("{}", expense_table(&records, settings));
            println!(
                "Total: {}  Fixed: {}  Variable: {}",
                format_amount(grand_total, symbol),
                format_amount(fixed, symbol),
                format_amount(grand_total - fixed, symbol)
            );
        }

        ExpenseCommands::Categories => {
            println!("Expense categories:");
            for category in ExpenseCategory::ALL {
                println!("  {} {}", category.icon(), category);
            }
        }

        ExpenseCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted expense record in {} ({})", removed.category, removed.id);
        }
    }

    Ok(())
}
