use anyhow::Result;
use clap::{Parser, Subcommand};

use finflow::cli::{
    handle_budget_command, handle_debt_command, handle_expense_command, handle_export_command,
    handle_goal_command, handle_income_command, handle_report_command, handle_savings_command,
};
use finflow::config::{FinFlowPaths, Settings};
use finflow::storage::Storage;

#[derive(Parser)]
#[command(
    name = "finflow",
    version,
    about = "Terminal-based personal finance ledger and dashboard",
    long_about = "FinFlow tracks income, expenses, savings, goals, and debts, and turns \
                  them into period summaries, budget-variance reports, a financial \
                  health score, and debt payoff projections."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income record commands
    #[command(subcommand, alias = "inc")]
    Income(finflow::cli::IncomeCommands),

    /// Expense record commands
    #[command(subcommand, alias = "exp")]
    Expense(finflow::cli::ExpenseCommands),

    /// Savings deposit commands
    #[command(subcommand, alias = "sav")]
    Savings(finflow::cli::SavingsCommands),

    /// Goal commands
    #[command(subcommand)]
    Goal(finflow::cli::GoalCommands),

    /// Debt commands
    #[command(subcommand)]
    Debt(finflow::cli::DebtCommands),

    /// Budget plan commands
    #[command(subcommand)]
    Budget(finflow::cli::BudgetCommands),

    /// Reports: summary, analysis, dashboard, budget, debt, goals
    #[command(subcommand)]
    Report(finflow::cli::ReportCommands),

    /// Export records or reports as CSV
    #[command(subcommand)]
    Export(finflow::cli::ExportCommands),

    /// Seed demo data into an empty ledger
    Demo,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = FinFlowPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Income(cmd)) => {
            handle_income_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Savings(cmd)) => {
            handle_savings_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            handle_goal_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Debt(cmd)) => {
            handle_debt_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Budget(cmd)) => {
            handle_budget_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Demo) => {
            let today = chrono::Local::now().date_naive();
            if finflow::sample::seed_demo_data(&storage, today)? {
                settings.save(&paths)?;
                println!("Seeded demo data at {}", paths.data_dir().display());
                println!();
                println!("Try these next:");
                println!("  finflow report dashboard");
                println!("  finflow report summary");
                println!("  finflow budget show");
                println!("  finflow debt list");
            } else {
                println!("Ledger already has records; demo data not seeded.");
            }
        }
        Some(Commands::Config) => {
            println!("FinFlow Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
        }
        None => {
            println!("FinFlow - Terminal-based personal finance ledger");
            println!();
            println!("Run 'finflow --help' for usage information.");
            println!("Run 'finflow demo' to seed sample data and explore the reports.");
        }
    }

    Ok(())
}
