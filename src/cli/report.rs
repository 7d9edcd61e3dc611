//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_amount, format_rate, format_rate_or_dash, short_month, summary_table};
use crate::error::FinFlowResult;
use crate::models::Money;
use crate::reports::{DashboardReport, MonthlySummaryReport, YearAnalysis};
use crate::storage::Storage;

use super::common::{parse_period_or_current_month, parse_year_or_current, today};

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Month-by-month summary for a year
    Summary {
        /// Year, defaults to the current year
        year: Option<i32>,
    },
    /// Trend analysis for a year
    Analysis {
        /// Year, defaults to the current year
        year: Option<i32>,
    },
    /// Dashboard KPIs for a month
    Dashboard {
        /// Period ("YYYY-MM"), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Budget vs actual overview
    Budget {
        /// Period ("YYYY-MM" or "YYYY"), defaults to the current month
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Debt payoff projections
    Debt,
    /// Goal progress
    Goals,
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> FinFlowResult<()> {
    match cmd {
        ReportCommands::Summary { year } => {
            let year = parse_year_or_current(year);
            let report = MonthlySummaryReport::generate(storage, year)?;

            println!("Monthly Summary: {}", year);
            println!("{}", summary_table(&report, settings));
        }

        ReportCommands::Analysis { year } => {
            let year = parse_year_or_current(year);
            let analysis = YearAnalysis::generate(storage, year)?;
            print_analysis(&analysis, settings);
        }

        ReportCommands::Dashboard { period } => {
            let period = parse_period_or_current_month(period.as_deref())?;
            let report = DashboardReport::generate(storage, period, today())?;
            print_dashboard(&report, settings);
        }

        ReportCommands::Budget { period } => {
            let period = parse_period_or_current_month(period.as_deref())?;
            super::budget::print_budget_overview(storage, settings, period)?;
        }

        ReportCommands::Debt => super::debt::print_debts(storage, settings)?,

        ReportCommands::Goals => super::goal::print_goals(storage, settings)?,
    }

    Ok(())
}

fn print_analysis(analysis: &YearAnalysis, settings: &Settings) {
    let symbol = &settings.currency_symbol;

    println!("Analysis: {}", analysis.year);
    println!(
        "  Avg monthly income:      {}  (peak: {} {})",
        format_amount(analysis.average_monthly_income, symbol),
        short_month(analysis.peak_income_month),
        format_amount(analysis.peak_income, symbol)
    );
    println!(
        "  Avg monthly expenses:    {}  (peak: {} {})",
        format_amount(analysis.average_monthly_expense, symbol),
        short_month(analysis.peak_expense_month),
        format_amount(analysis.peak_expense, symbol)
    );

    let growth_note = if analysis.expense_growth_rate > 10.0 {
        "⚠ growing fast — review spending"
    } else if analysis.expense_growth_rate > 0.0 {
        "moderate growth"
    } else {
        "stable or declining"
    };
    println!(
        "  Expense growth rate:     {:.1}%  ({})",
        analysis.expense_growth_rate, growth_note
    );
    println!(
        "  Monthly burn rate:       {}",
        format_amount(analysis.average_monthly_expense, symbol)
    );

    let coverage_note = if analysis.coverage_months >= 6.0 {
        "fully funded (≥6 months)"
    } else if analysis.coverage_months >= 3.0 {
        "partially funded"
    } else if analysis.emergency_fund.is_zero() {
        "no emergency fund"
    } else {
        "under-funded (<3 months)"
    };
    println!(
        "  Emergency fund coverage: {:.1} months  ({})",
        analysis.coverage_months, coverage_note
    );
    println!(
        "  Annual savings rate:     {}",
        format_rate_or_dash(analysis.annual_savings_rate)
    );
}

fn print_dashboard(report: &DashboardReport, settings: &Settings) {
    let symbol = &settings.currency_symbol;

    println!("Dashboard: {}", report.period.label());
    println!(
        "  Income:        {}  ({} transactions)",
        format_amount(report.income, symbol),
        report.income_count
    );
    println!(
        "  Expenses:      {}  ({} transactions)",
        format_amount(report.expense, symbol),
        report.expense_count
    );
    println!("  Savings:       {}", format_amount(report.savings, symbol));

    let net_marker = if report.net.is_negative() { "⚠" } else { "✅" };
    println!(
        "  Net savings:   {} {}",
        format_amount(report.net, symbol),
        net_marker
    );
    println!("  Savings rate:  {}", format_rate(report.savings_rate));

    if report.total_budget.is_positive() {
        let clamped = std::cmp::max(Money::zero(), report.budget_remaining);
        let note = if report.budget_remaining.is_negative() {
            "⚠ over budget".to_string()
        } else {
            format!("of {} budget", format_amount(report.total_budget, symbol))
        };
        println!(
            "  Budget left:   {}  ({})",
            format_amount(clamped, symbol),
            note
        );
    } else {
        println!("  Budget left:   –  (set budgets with 'finflow budget set')");
    }

    let health_note = if report.health_score >= 70 {
        "Excellent"
    } else if report.health_score >= 40 {
        "Fair"
    } else {
        "Needs work"
    };
    println!(
        "  Health score:  {}/100  ({})",
        report.health_score, health_note
    );

    if let Some((category, amount)) = report.top_category {
        println!(
            "  Top expense:   {} {} {}",
            category.icon(),
            category,
            format_amount(amount, symbol)
        );
    }

    println!("\n  8-week expense trend:");
    let max = report
        .weekly_trend
        .iter()
        .map(|p| p.total.cents())
        .max()
        .unwrap_or(0);
    for point in &report.weekly_trend {
        let bar = if max > 0 {
            crate::display::format_bar(point.total.cents() as f64 / max as f64, 20)
        } else {
            crate::display::format_bar(0.0, 20)
        };
        println!(
            "    {:>3} {} {}",
            point.label,
            bar,
            format_amount(point.total, symbol)
        );
    }
}
