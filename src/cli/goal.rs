//! Goal CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, goals_table};
use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Goal, GoalCategory, GoalId};
use crate::reports::GoalProgressReport;
use crate::services::GoalService;
use crate::storage::Storage;

use super::common::{parse_amount, parse_date_or_today, today};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Add a financial goal
    Add {
        /// Goal name, e.g. "Summer Vacation"
        name: String,
        /// Target amount
        target: String,
        /// Target date (YYYY-MM-DD)
        date: String,
        /// Goal category
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Amount already saved
        #[arg(short, long)]
        saved: Option<String>,
    },
    /// List goals with progress projections
    List,
    /// Update the saved amount on a goal
    Saved {
        /// Goal ID (full UUID or "goal-" short form)
        id: GoalId,
        /// New saved amount
        amount: String,
    },
    /// Delete a goal by ID
    Delete {
        /// Goal ID (full UUID or "goal-" short form)
        id: GoalId,
    },
}

/// Handle a goal command
pub fn handle_goal_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinFlowResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            date,
            category,
            saved,
        } => {
            let category: GoalCategory = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    FinFlowError::Validation(e.to_string())
                })?;
            let saved = match saved {
                Some(s) => parse_amount(&s)?,
                None => crate::models::Money::zero(),
            };

            let goal = Goal::new(
                name,
                parse_amount(&target)?,
                parse_date_or_today(Some(&date))?,
                category,
            )
            .with_saved(saved);

            let goal = service.add(goal)?;
            println!(
                "Added goal '{}' with target {} by {} ({})",
                goal.name,
                format_amount(goal.target, &settings.currency_symbol),
                goal.target_date,
                goal.id
            );
        }

        GoalCommands::List => print_goals(storage, settings)?,

        GoalCommands::Saved { id, amount } => {
            let goal = service.set_saved(id, parse_amount(&amount)?)?;
            if goal.is_achieved() {
                println!("Goal '{}' achieved! 🎉", goal.name);
            } else {
                println!(
                    "Goal '{}' now at {} of {}",
                    goal.name,
                    format_amount(goal.saved, &settings.currency_symbol),
                    format_amount(goal.target, &settings.currency_symbol)
                );
            }
        }

        GoalCommands::Delete { id } => {
            let removed = service.delete(id)?;
            println!("Deleted goal '{}' ({})", removed.name, removed.id);
        }
    }

    Ok(())
}

/// Print the goal progress table
pub fn print_goals(storage: &Storage, settings: &Settings) -> FinFlowResult<()> {
    let report = GoalProgressReport::generate(storage, today())?;

    if report.projections.is_empty() {
        println!("No goals yet. Add one with 'finflow goal add'.");
        return Ok(());
    }

    println!("Goals");
    println!("{}", goals_table(&report, settings));

    for p in &report.projections {
        if let Some(needed) = p.needed_per_month {
            println!(
                "💡 Save {}/mo to reach '{}'",
                format_amount(needed, &settings.currency_symbol),
                p.name
            );
        }
    }

    Ok(())
}
