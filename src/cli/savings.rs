//! Savings CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, savings_table};
use crate::error::FinFlowResult;
use crate::models::{SavingsId, SavingsRecord};
use crate::reports::total;
use crate::services::SavingsService;
use crate::storage::Storage;

use super::common::{parse_amount, parse_date_or_today, parse_period_or_current_month};

/// Savings subcommands
#[derive(Subcommand)]
pub enum SavingsCommands {
    /// Add a savings deposit
    Add {
        /// Savings type, e.g. "Emergency Fund", "Retirement"
        #[arg(value_name = "TYPE")]
        kind: String,
        /// Amount, e.g. "500" or "500.00"
        amount: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Destination account
        #[arg(short, long)]
        account: Option<String>,
        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List savings deposits for a period
    List {
        /// Period ("YYYY-MM" or "YYYY"), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Delete a savings deposit by ID
    Delete {
        /// Record ID (full UUID or "sav-" short form)
        id: SavingsId,
    },
}

/// Handle a savings command
pub fn handle_savings_command(
    storage: &Storage,
    settings: &Settings,
    cmd: SavingsCommands,
) -> FinFlowResult<()> {
    let service = SavingsService::new(storage);

    match cmd {
        SavingsCommands::Add {
            kind,
            amount,
            date,
            account,
            notes,
        } => {
            let record = SavingsRecord::new(
                parse_date_or_today(date.as_deref())?,
                kind,
                parse_amount(&amount)?,
            )
            .with_account(account.unwrap_or_default())
            .with_notes(notes.unwrap_or_default());

            let record = service.add(record)?;
            println!(
                "Added {} deposit of {} ({})",
                record.kind,
                format_amount(record.amount, &settings.currency_symbol),
                record.id
            );
        }

        SavingsCommands::List { period } => {
            let period = parse_period_or_current_month(period.as_deref())?;
            let mut records = service.list_for_period(period)?;
            records.sort_by(|a, b| b.date.cmp(&a.date));

            if records.is_empty() {
                println!("No savings deposits for {}.", period.label());
                return Ok(());
            }

            println!("Savings: {}", period.label());
            println!("{}", savings_table(&records, settings));
            println!(
                "Total: {}  ({} deposits)  Emergency fund (all-time): {}",
                format_amount(total(&records), &settings.currency_symbol),
                records.len(),
                format_amount(
                    service.emergency_fund_balance()?,
                    &settings.currency_symbol
                )
            );
        }

        SavingsCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted savings deposit '{}' ({})", removed.kind, removed.id);
        }
    }

    Ok(())
}
