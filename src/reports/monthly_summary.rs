//! Monthly summary and year analysis
//!
//! The summary lays out one row per calendar month with totals, ratios, and a
//! health score; the analysis derives averages, peaks, the expense growth
//! rate, and emergency-fund coverage from the same 12-month series.

use crate::error::FinFlowResult;
use crate::models::{ExpenseKind, Money, Period};
use crate::storage::Storage;

use super::aggregate::{total, total_by_kind};
use super::health::health_score;

/// Summary figures for one month
#[derive(Debug, Clone)]
pub struct MonthRow {
    /// Calendar month, 1-12
    pub month: u32,
    pub income: Money,
    pub expense: Money,
    pub savings: Money,
    /// income - expense; negative in deficit months
    pub net: Money,
    /// net / income, 0 when there was no income
    pub savings_rate: f64,
    /// expense / income, 0 when there was no income
    pub expense_ratio: f64,
    pub fixed: Money,
    pub variable: Money,
    /// Health score from this month's inputs plus the all-time emergency fund
    pub health_score: u8,
}

/// Totals row across the whole year
#[derive(Debug, Clone)]
pub struct SummaryTotals {
    pub income: Money,
    pub expense: Money,
    pub savings: Money,
    pub net: Money,
    pub fixed: Money,
    pub variable: Money,
    /// net / income over the year; None when there was no income
    pub savings_rate: Option<f64>,
    /// expense / income over the year; None when there was no income
    pub expense_ratio: Option<f64>,
}

/// Month-by-month summary for a year
#[derive(Debug, Clone)]
pub struct MonthlySummaryReport {
    pub year: i32,
    /// Twelve rows, January through December
    pub rows: Vec<MonthRow>,
    pub totals: SummaryTotals,
}

impl MonthlySummaryReport {
    /// Generate the summary for a year
    pub fn generate(storage: &Storage, year: i32) -> FinFlowResult<Self> {
        let emergency_fund: Money = storage
            .savings
            .all()?
            .iter()
            .filter(|r| r.is_emergency_fund())
            .map(|r| r.amount)
            .sum();

        let mut rows = Vec::with_capacity(12);
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();
        let mut total_savings = Money::zero();
        let mut total_fixed = Money::zero();

        for month in 1..=12 {
            let period = Period::month(year, month);
            let income = total(&storage.income.in_period(period)?);
            let expenses = storage.expenses.in_period(period)?;
            let expense = total(&expenses);
            let savings = total(&storage.savings.in_period(period)?);
            let fixed = total_by_kind(&expenses, ExpenseKind::Fixed);
            let variable = expense - fixed;
            let net = income - expense;

            let income_f = income.as_f64();
            let savings_rate = if income_f > 0.0 {
                net.as_f64() / income_f
            } else {
                0.0
            };
            let expense_ratio = if income_f > 0.0 {
                expense.as_f64() / income_f
            } else {
                0.0
            };

            total_income += income;
            total_expense += expense;
            total_savings += savings;
            total_fixed += fixed;

            rows.push(MonthRow {
                month,
                income,
                expense,
                savings,
                net,
                savings_rate,
                expense_ratio,
                fixed,
                variable,
                health_score: health_score(income, expense, fixed, emergency_fund),
            });
        }

        let net = total_income - total_expense;
        let (savings_rate, expense_ratio) = if total_income.is_positive() {
            (
                Some(net.as_f64() / total_income.as_f64()),
                Some(total_expense.as_f64() / total_income.as_f64()),
            )
        } else {
            (None, None)
        };

        Ok(Self {
            year,
            rows,
            totals: SummaryTotals {
                income: total_income,
                expense: total_expense,
                savings: total_savings,
                net,
                fixed: total_fixed,
                variable: total_expense - total_fixed,
                savings_rate,
                expense_ratio,
            },
        })
    }
}

/// Derived analysis over a year's 12-month series
#[derive(Debug, Clone)]
pub struct YearAnalysis {
    pub year: i32,
    /// Total income / 12, rounded to cents for display
    pub average_monthly_income: Money,
    /// Total expense / 12, rounded to cents for display (the burn rate)
    pub average_monthly_expense: Money,
    /// Month (1-12) with the highest income; first occurrence wins ties
    pub peak_income_month: u32,
    pub peak_income: Money,
    /// Month (1-12) with the highest expense; first occurrence wins ties
    pub peak_expense_month: u32,
    pub peak_expense: Money,
    /// Percent change from the first to the last non-zero expense month;
    /// 0 when fewer than two such months exist
    pub expense_growth_rate: f64,
    /// All-time emergency fund balance
    pub emergency_fund: Money,
    /// Emergency fund / average monthly expense; 0 when the average is 0
    pub coverage_months: f64,
    /// (income - expense) / income over the year; None when there was no income
    pub annual_savings_rate: Option<f64>,
}

impl YearAnalysis {
    /// Generate the analysis for a year
    pub fn generate(storage: &Storage, year: i32) -> FinFlowResult<Self> {
        let mut incomes = Vec::with_capacity(12);
        let mut expenses = Vec::with_capacity(12);

        for month in 1..=12 {
            let period = Period::month(year, month);
            incomes.push(total(&storage.income.in_period(period)?));
            expenses.push(total(&storage.expenses.in_period(period)?));
        }

        let total_income: Money = incomes.iter().copied().sum();
        let total_expense: Money = expenses.iter().copied().sum();

        let average_income = total_income.cents() as f64 / 12.0;
        let average_expense = total_expense.cents() as f64 / 12.0;

        let (peak_income_month, peak_income) = peak(&incomes);
        let (peak_expense_month, peak_expense) = peak(&expenses);

        let expense_growth_rate = growth_rate(&expenses);

        let emergency_fund: Money = storage
            .savings
            .all()?
            .iter()
            .filter(|r| r.is_emergency_fund())
            .map(|r| r.amount)
            .sum();

        let coverage_months = if average_expense > 0.0 {
            emergency_fund.cents() as f64 / average_expense
        } else {
            0.0
        };

        let annual_savings_rate = if total_income.is_positive() {
            Some((total_income - total_expense).as_f64() / total_income.as_f64())
        } else {
            None
        };

        Ok(Self {
            year,
            average_monthly_income: Money::from_cents(average_income.round() as i64),
            average_monthly_expense: Money::from_cents(average_expense.round() as i64),
            peak_income_month,
            peak_income,
            peak_expense_month,
            peak_expense,
            expense_growth_rate,
            emergency_fund,
            coverage_months,
            annual_savings_rate,
        })
    }
}

/// Peak month (1-12) and value; scans January to December, first occurrence
/// wins ties. An all-zero series peaks at January with zero.
fn peak(series: &[Money]) -> (u32, Money) {
    let mut best_month = 0usize;
    let mut best = Money::zero();

    for (index, &value) in series.iter().enumerate() {
        if value > best {
            best = value;
            best_month = index;
        }
    }

    (best_month as u32 + 1, best)
}

/// Growth rate in percent over the months with non-zero expense
fn growth_rate(series: &[Money]) -> f64 {
    let non_zero: Vec<f64> = series
        .iter()
        .filter(|m| m.is_positive())
        .map(|m| m.cents() as f64)
        .collect();

    if non_zero.len() < 2 {
        return 0.0;
    }

    let first = non_zero[0];
    let last = non_zero[non_zero.len() - 1];
    (last - first) / first * 100.0
}
