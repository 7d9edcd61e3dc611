//! Export CLI commands

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{FinFlowError, FinFlowResult};
use crate::export::{export_expenses, export_income, export_savings, export_summary};
use crate::reports::MonthlySummaryReport;
use crate::storage::Storage;

use super::common::parse_year_or_current;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export income records as CSV
    Income {
        /// Output file path
        output: PathBuf,
    },
    /// Export expense records as CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },
    /// Export savings records as CSV
    Savings {
        /// Output file path
        output: PathBuf,
    },
    /// Export the monthly summary for a year as CSV
    Summary {
        /// Output file path
        output: PathBuf,
        /// Year, defaults to the current year
        #[arg(short, long)]
        year: Option<i32>,
    },
}

/// Handle an export command
pub fn handle_export_command(
    storage: &Storage,
    _settings: &Settings,
    cmd: ExportCommands,
) -> FinFlowResult<()> {
    match cmd {
        ExportCommands::Income { output } => {
            let records = storage.income.all()?;
            export_income(&records, create(&output)?)?;
            println!("Exported {} income records to {}", records.len(), output.display());
        }

        ExportCommands::Expenses { output } => {
            let records = storage.expenses.all()?;
            export_expenses(&records, create(&output)?)?;
            println!(
                "Exported {} expense records to {}",
                records.len(),
                output.display()
            );
        }

        ExportCommands::Savings { output } => {
            let records = storage.savings.all()?;
            export_savings(&records, create(&output)?)?;
            println!(
                "Exported {} savings records to {}",
                records.len(),
                output.display()
            );
        }

        ExportCommands::Summary { output, year } => {
            let year = parse_year_or_current(year);
            let report = MonthlySummaryReport::generate(storage, year)?;
            export_summary(&report, create(&output)?)?;
            println!("Exported {} summary to {}", year, output.display());
        }
    }

    Ok(())
}

fn create(path: &Path) -> FinFlowResult<File> {
    File::create(path)
        .map_err(|e| FinFlowError::Export(format!("Failed to create {}: {}", path.display(), e)))
}
