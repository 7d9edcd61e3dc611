//! CSV export
//!
//! Writes records and the monthly summary as CSV. Amounts are exported as
//! plain decimal values without currency symbols so spreadsheets parse them.

use std::io::Write;

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{ExpenseRecord, IncomeRecord, SavingsRecord, MONTH_NAMES};
use crate::reports::MonthlySummaryReport;

fn export_err(e: csv::Error) -> FinFlowError {
    FinFlowError::Export(e.to_string())
}

/// Export income records as CSV
pub fn export_income<W: Write>(records: &[IncomeRecord], writer: W) -> FinFlowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Source", "Category", "Amount", "Payment Method", "Notes"])
        .map_err(export_err)?;

    for record in records {
        csv_writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.source.clone(),
                record.category.clone(),
                record.amount.to_string(),
                record.payment_method.clone(),
                record.notes.clone(),
            ])
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(|e| FinFlowError::Export(e.to_string()))
}

/// Export expense records as CSV
pub fn export_expenses<W: Write>(records: &[ExpenseRecord], writer: W) -> FinFlowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Date",
            "Category",
            "Subcategory",
            "Amount",
            "Payment Method",
            "Type",
            "Notes",
        ])
        .map_err(export_err)?;

    for record in records {
        csv_writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.category.to_string(),
                record.subcategory.clone(),
                record.amount.to_string(),
                record.payment_method.clone(),
                record.kind.to_string(),
                record.notes.clone(),
            ])
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(|e| FinFlowError::Export(e.to_string()))
}

/// Export savings records as CSV
pub fn export_savings<W: Write>(records: &[SavingsRecord], writer: W) -> FinFlowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Date", "Type", "Amount", "Account", "Notes"])
        .map_err(export_err)?;

    for record in records {
        csv_writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                record.kind.clone(),
                record.amount.to_string(),
                record.account.clone(),
                record.notes.clone(),
            ])
            .map_err(export_err)?;
    }

    csv_writer.flush().map_err(|e| FinFlowError::Export(e.to_string()))
}

/// Export the monthly summary as CSV, one row per month plus a totals row
pub fn export_summary<W: Write>(report: &MonthlySummaryReport, writer: W) -> FinFlowResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Month",
            "Income",
            "Expenses",
            "Savings",
            "Net",
            "Savings Rate",
            "Expense Ratio",
            "Fixed",
            "Variable",
            "Health Score",
        ])
        .map_err(export_err)?;

    for row in &report.rows {
        csv_writer
            .write_record([
                MONTH_NAMES[(row.month - 1) as usize].to_string(),
                row.income.to_string(),
                row.expense.to_string(),
                row.savings.to_string(),
                row.net.to_string(),
                format!("{:.4}", row.savings_rate),
                format!("{:.4}", row.expense_ratio),
                row.fixed.to_string(),
                row.variable.to_string(),
                row.health_score.to_string(),
            ])
            .map_err(export_err)?;
    }

    let totals = &report.totals;
    csv_writer
        .write_record([
            "TOTAL".to_string(),
            totals.income.to_string(),
            totals.expense.to_string(),
            totals.savings.to_string(),
            totals.net.to_string(),
            totals
                .savings_rate
                .map(|r| format!("{:.4}", r))
                .unwrap_or_default(),
            totals
                .expense_ratio
                .map(|r| format!("{:.4}", r))
                .unwrap_or_default(),
            totals.fixed.to_string(),
            totals.variable.to_string(),
            String::new(),
        ])
        .map_err(export_err)?;

    csv_writer.flush().map_err(|e| FinFlowError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_income() {
        let records = vec![IncomeRecord::new(
            date(2025, 1, 1),
            "Employer Corp",
            "Salary",
            Money::from_units(4500),
        )];

        let mut buffer = Vec::new();
        export_income(&records, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("Date,Source,Category,Amount"));
        assert!(output.contains("2025-01-01,Employer Corp,Salary,4500.00"));
    }

    #[test]
    fn test_export_expenses_quotes_multiword_category() {
        use crate::models::{ExpenseCategory, ExpenseKind};

        let records = vec![ExpenseRecord::new(
            date(2025, 1, 5),
            ExpenseCategory::DebtPayment,
            Money::from_units(250),
            ExpenseKind::Fixed,
        )];

        let mut buffer = Vec::new();
        export_expenses(&records, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Debt Payment"));
        assert!(output.contains("250.00"));
        assert!(output.contains("Fixed"));
    }
}
