//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, income_table};
use crate::error::FinFlowResult;
use crate::models::{IncomeId, IncomeRecord};
use crate::reports::total;
use crate::services::IncomeService;
use crate::storage::Storage;

use super::common::{parse_amount, parse_date_or_today, parse_period_or_current_month};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Add an income record
    Add {
        /// Income source, e.g. "Employer Corp"
        source: String,
        /// Amount, e.g. "4500" or "4500.00"
        amount: String,
        /// Category, e.g. "Salary", "Freelance"
        #[arg(short, long, default_value = "Other")]
        category: String,
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
    /// List income records for a period
    List {
        /// Period ("YYYY-MM" or "YYYY"), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Delete an income record by ID
    Delete {
        /// Record ID (full UUID or "inc-" short form)
        id: IncomeId,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> FinFlowResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            category,
            date,
            payment,
            notes,
        } => {
            let record = IncomeRecord::new(
                parse_date_or_today(date.as_deref())?,
                source,
                category,
                parse_amount(&amount)?,
            )
            .with_payment_method(payment.unwrap_or_default())
            .with_notes(notes.unwrap_or_default());

            let record = service.add(record)?;
            println!(
                "Added income {} from '{}' ({})",
                format_amount(record.amount, &settings.currency_symbol),
                record.source,
                record.id
            );
        }

        IncomeCommands::List { period } => {
            let period = parse_period_or_current_month(period.as_deref())?;
            let mut records = service.list_for_period(period)?;
            records.sort_by(|a, b| b.date.cmp(&a.date));

            if records.is_empty() {
                println!("No income records for {}.", period.label());
                return Ok(());
            }

            println!("Income: {}", period.label());
            println!("{}", income_table(&records, settings));
            println!(
                "Total: {}  ({} records)",
                format_amount(total(&records), &settings.currency_symbol),
                records.len()
            );
        }

        IncomeCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted income record '{}' ({})", removed.source, removed.id);
        }
    }

    Ok(())
}
