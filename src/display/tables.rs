//! Table rendering for records and reports

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::config::Settings;
use crate::models::{
    ExpenseRecord, IncomeRecord, SavingsRecord, MONTH_NAMES, SHORT_MONTHS,
};
use crate::reports::{
    BudgetOverviewReport, DebtPayoffReport, GoalProgressReport, MonthlySummaryReport, Payoff,
};

use super::format::{format_amount, format_bar, format_rate, format_rate_or_dash, format_signed};

fn finish(builder: Builder) -> String {
    let mut table = builder.build();
    table.with(Style::rounded());
    table.to_string()
}

/// Render income records as a table
pub fn income_table(records: &[IncomeRecord], settings: &Settings) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Date", "Source", "Category", "Amount", "Payment", "Notes"]);

    for record in records {
        builder.push_record([
            record.date.format(&settings.date_format).to_string(),
            record.source.clone(),
            record.category.clone(),
            format_amount(record.amount, &settings.currency_symbol),
            record.payment_method.clone(),
            record.notes.clone(),
        ]);
    }

    finish(builder)
}

/// Render expense records as a table
pub fn expense_table(records: &[ExpenseRecord], settings: &Settings) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Date",
        "Category",
        "Subcategory",
        "Amount",
        "Payment",
        "Type",
        "Notes",
    ]);

    for record in records {
        builder.push_record([
            record.date.format(&settings.date_format).to_string(),
            format!("{} {}", record.category.icon(), record.category),
            record.subcategory.clone(),
            format_amount(record.amount, &settings.currency_symbol),
            record.payment_method.clone(),
            record.kind.to_string(),
            record.notes.clone(),
        ]);
    }

    finish(builder)
}

/// Render savings records as a table
pub fn savings_table(records: &[SavingsRecord], settings: &Settings) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Date", "Type", "Amount", "Account", "Notes"]);

    for record in records {
        builder.push_record([
            record.date.format(&settings.date_format).to_string(),
            record.kind.clone(),
            format_amount(record.amount, &settings.currency_symbol),
            record.account.clone(),
            record.notes.clone(),
        ]);
    }

    finish(builder)
}

/// Render the budget overview as a table
pub fn budget_table(report: &BudgetOverviewReport, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut builder = Builder::default();
    builder.push_record([
        "Category", "Budget", "Actual", "Variance", "Used", "Status",
    ]);

    for row in &report.rows {
        builder.push_record([
            format!("{} {}", row.category.icon(), row.category),
            format_amount(row.limit, symbol),
            format_amount(row.actual, symbol),
            format_signed(row.variance, symbol),
            format!(
                "{} {:.0}%",
                format_bar(row.utilization, 10),
                row.utilization * 100.0
            ),
            row.status.label().to_string(),
        ]);
    }

    builder.push_record([
        "TOTAL".to_string(),
        format_amount(report.total_limit, symbol),
        format_amount(report.total_actual, symbol),
        format_signed(report.total_variance, symbol),
        String::new(),
        format!("Remaining: {}", format_amount(report.remaining, symbol)),
    ]);

    finish(builder)
}

/// Render the debt payoff report as a table
pub fn debt_table(report: &DebtPayoffReport, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut builder = Builder::default();
    builder.push_record([
        "Debt", "Lender", "Balance", "Rate", "Min Pay", "Interest/mo", "Payoff", "Strategy",
    ]);

    for row in &report.rows {
        let payoff = match row.months {
            Payoff::Months(n) => format!("{}mo", n),
            Payoff::Never => "Never (increase payment)".to_string(),
        };

        builder.push_record([
            row.name.clone(),
            row.lender.clone(),
            format_amount(row.balance, symbol),
            format!("{:.2}%", row.annual_rate_percent),
            format_amount(row.minimum_payment, symbol),
            format_amount(row.monthly_interest, symbol),
            payoff,
            format!("Avalanche #{}", row.avalanche_rank),
        ]);
    }

    finish(builder)
}

/// Render goal projections as a table
pub fn goals_table(report: &GoalProgressReport, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut builder = Builder::default();
    builder.push_record([
        "Goal", "Category", "Saved", "Target", "Progress", "Months Left", "Needed/mo",
    ]);

    for p in &report.projections {
        let progress = if p.achieved {
            format!("{} 🎉", format_rate(p.percent_complete))
        } else {
            format_rate(p.percent_complete)
        };

        builder.push_record([
            p.name.clone(),
            format!("{} {}", p.category.icon(), p.category),
            format_amount(p.saved, symbol),
            format_amount(p.target, symbol),
            progress,
            p.months_remaining.to_string(),
            p.needed_per_month
                .map(|m| format_amount(m, symbol))
                .unwrap_or_default(),
        ]);
    }

    finish(builder)
}

/// Render the monthly summary as a table
pub fn summary_table(report: &MonthlySummaryReport, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut builder = Builder::default();
    builder.push_record([
        "Month", "Income", "Expenses", "Savings", "Net", "Sav Rate", "Exp Ratio", "Fixed",
        "Variable", "Health",
    ]);

    for row in &report.rows {
        builder.push_record([
            MONTH_NAMES[(row.month - 1) as usize].to_string(),
            format_amount(row.income, symbol),
            format_amount(row.expense, symbol),
            format_amount(row.savings, symbol),
            format_signed(row.net, symbol),
            format_rate(row.savings_rate),
            format_rate(row.expense_ratio),
            format_amount(row.fixed, symbol),
            format_amount(row.variable, symbol),
            if row.health_score > 0 {
                row.health_score.to_string()
            } else {
                "–".to_string()
            },
        ]);
    }

    let totals = &report.totals;
    builder.push_record([
        "TOTAL / AVG".to_string(),
        format_amount(totals.income, symbol),
        format_amount(totals.expense, symbol),
        format_amount(totals.savings, symbol),
        format_signed(totals.net, symbol),
        format_rate_or_dash(totals.savings_rate),
        format_rate_or_dash(totals.expense_ratio),
        format_amount(totals.fixed, symbol),
        format_amount(totals.variable, symbol),
        "–".to_string(),
    ]);

    finish(builder)
}

/// Label for a 1-based month in compact contexts
pub fn short_month(month: u32) -> &'static str {
    SHORT_MONTHS[(month - 1) as usize]
}
