//! Debt CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{debt_table, format_amount};
use crate::error::FinFlowResult;
use crate::models::{Debt, DebtId, Money};
use crate::reports::DebtPayoffReport;
use crate::services::DebtService;
use crate::storage::Storage;

use super::common::parse_amount;

/// Debt subcommands
#[derive(Subcommand)]
pub enum DebtCommands {
    /// Add a debt
    Add {
        /// Debt name, e.g. "Credit Card"
        name: String,
        /// Current balance
        balance: String,
        /// Annual interest rate in percent, e.g. 22 or 5.5
        rate: f64,
        /// Minimum monthly payment
        #[arg(short, long, default_value = "0")]
        minpay: String,
        /// Extra monthly payment on top of the minimum
        #[arg(short, long)]
        extra: Option<String>,
        /// Lender name
        #[arg(short, long)]
        lender: Option<String>,
    },
    /// List debts with payoff projections
    List,
    /// Delete a debt by ID
    Delete {
        /// Debt ID (full UUID or "debt-" short form)
        id: DebtId,
    },
}

/// Handle a debt command
pub fn handle_debt_command(
    storage: &Storage,
    settings: &Settings,
    cmd: DebtCommands,
) -> FinFlowResult<()> {
    let service = DebtService::new(storage);

    match cmd {
        DebtCommands::Add {
            name,
            balance,
            rate,
            minpay,
            extra,
            lender,
        } => {
            let extra = match extra {
                Some(s) => parse_amount(&s)?,
                None => Money::zero(),
            };

            let debt = Debt::new(name, parse_amount(&balance)?, rate, parse_amount(&minpay)?)
                .with_lender(lender.unwrap_or_default())
                .with_extra_payment(extra);

            let debt = service.add(debt)?;
            println!(
                "Added debt '{}' with balance {} at {:.2}% ({})",
                debt.name,
                format_amount(debt.balance, &settings.currency_symbol),
                debt.annual_rate_percent,
                debt.id
            );
        }

        DebtCommands::List => print_debts(storage, settings)?,

        DebtCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted debt '{}' ({})", removed.name, removed.id);
        }
    }

    Ok(())
}

/// Print the debt payoff table and summary
pub fn print_debts(storage: &Storage, settings: &Settings) -> FinFlowResult<()> {
    let report = DebtPayoffReport::generate(storage)?;

    if report.rows.is_empty() {
        println!("No debts tracked. Add one with 'finflow debt add'.");
        return Ok(());
    }

    let symbol = &settings.currency_symbol;
    println!("Debt Tracker (Avalanche strategy)");
    println!("{}", debt_table(&report, settings));
    println!(
        "Total debt: {}  Monthly interest: {}  Monthly payments: {}",
        format_amount(report.total_balance, symbol),
        format_amount(report.total_monthly_interest, symbol),
        format_amount(report.total_monthly_payment, symbol)
    );

    Ok(())
}
