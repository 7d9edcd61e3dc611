//! Dashboard KPIs
//!
//! The headline numbers for the selected month: totals, net, savings rate,
//! budget remaining, health score, top expense category, and a rolling
//! eight-week expense trend.

use chrono::{Duration, NaiveDate};

use crate::error::FinFlowResult;
use crate::models::{ExpenseCategory, ExpenseRecord, Money, Period};
use crate::storage::Storage;

use super::aggregate::{top_category, total, total_by_kind};
use super::health::health_score;

/// One 7-day window in the weekly expense trend
#[derive(Debug, Clone)]
pub struct WeeklyPoint {
    /// Window label, "W1" (oldest) through "W8" (current week)
    pub label: String,
    /// First day of the window
    pub start: NaiveDate,
    /// Last day of the window (inclusive)
    pub end: NaiveDate,
    /// Expenses dated within the window
    pub total: Money,
}

/// Eight 7-day windows ending today, stepping back a week at a time
///
/// Windows scan ALL expenses, not just the selected period, so the trend
/// stays continuous across month boundaries.
pub fn weekly_expense_trend(expenses: &[ExpenseRecord], today: NaiveDate) -> Vec<WeeklyPoint> {
    (0..8)
        .rev()
        .map(|weeks_back| {
            let end = today - Duration::days(7 * weeks_back);
            let start = end - Duration::days(6);
            let total = expenses
                .iter()
                .filter(|e| e.date >= start && e.date <= end)
                .map(|e| e.amount)
                .sum();

            WeeklyPoint {
                label: format!("W{}", 8 - weeks_back),
                start,
                end,
                total,
            }
        })
        .collect()
}

/// Headline figures for one month
#[derive(Debug, Clone)]
pub struct DashboardReport {
    /// The selected month
    pub period: Period,
    pub income: Money,
    pub expense: Money,
    pub savings: Money,
    /// Number of income records in the period
    pub income_count: usize,
    /// Number of expense records in the period
    pub expense_count: usize,
    /// income - expense
    pub net: Money,
    /// net / income, 0 when there was no income
    pub savings_rate: f64,
    /// Sum of all configured budget limits
    pub total_budget: Money,
    /// total_budget - expense; negative when over budget (display clamps)
    pub budget_remaining: Money,
    /// Health score for the month
    pub health_score: u8,
    /// Category with the largest spend this month
    pub top_category: Option<(ExpenseCategory, Money)>,
    /// Rolling eight-week expense trend ending today
    pub weekly_trend: Vec<WeeklyPoint>,
}

impl DashboardReport {
    /// Generate the dashboard for a month, as of `today`
    pub fn generate(storage: &Storage, period: Period, today: NaiveDate) -> FinFlowResult<Self> {
        let income_records = storage.income.in_period(period)?;
        let expense_records = storage.expenses.in_period(period)?;
        let savings_records = storage.savings.in_period(period)?;

        let income = total(&income_records);
        let expense = total(&expense_records);
        let savings = total(&savings_records);
        let net = income - expense;
        let savings_rate = if income.is_positive() {
            net.as_f64() / income.as_f64()
        } else {
            0.0
        };

        let fixed = total_by_kind(&expense_records, crate::models::ExpenseKind::Fixed);
        let emergency_fund: Money = storage
            .savings
            .all()?
            .iter()
            .filter(|r| r.is_emergency_fund())
            .map(|r| r.amount)
            .sum();

        let total_budget = storage.budgets.plan()?.total_limit();

        let all_expenses = storage.expenses.all()?;

        Ok(Self {
            period,
            income,
            expense,
            savings,
            income_count: income_records.len(),
            expense_count: expense_records.len(),
            net,
            savings_rate,
            total_budget,
            budget_remaining: total_budget - expense,
            health_score: health_score(income, expense, fixed, emergency_fund),
            top_category: top_category(&expense_records),
            weekly_trend: weekly_expense_trend(&all_expenses, today),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FinFlowPaths;
    use crate::models::{ExpenseKind, IncomeRecord};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinFlowPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(d: NaiveDate, category: ExpenseCategory, units: i64) -> ExpenseRecord {
        ExpenseRecord::new(d, category, Money::from_units(units), ExpenseKind::Variable)
    }

    #[test]
    fn test_weekly_trend_windows() {
        let today = date(2025, 3, 31);
        let expenses = vec![
            expense(today, ExpenseCategory::Food, 50),
            expense(today - Duration::days(6), ExpenseCategory::Food, 30),
            expense(today - Duration::days(7), ExpenseCategory::Food, 20),
            expense(today - Duration::days(55), ExpenseCategory::Food, 40),
            expense(today - Duration::days(60), ExpenseCategory::Food, 999),
        ];

        let trend = weekly_expense_trend(&expenses, today);
        assert_eq!(trend.len(), 8);
        assert_eq!(trend[0].label, "W1");
        assert_eq!(trend[7].label, "W8");

        // Current week covers today and the six days before it
        assert_eq!(trend[7].total.cents(), 8_000);
        // Day seven falls into the previous window
        assert_eq!(trend[6].total.cents(), 2_000);
        // The oldest window starts 55 days back; 60 days back is outside
        assert_eq!(trend[0].total.cents(), 4_000);
        let total_tracked: i64 = trend.iter().map(|p| p.total.cents()).sum();
        assert_eq!(total_tracked, 14_000);
    }

    #[test]
    fn test_dashboard_kpis() {
        let (_temp_dir, storage) = create_test_storage();
        let jan = Period::month(2025, 1);

        storage
            .income
            .insert(IncomeRecord::new(
                date(2025, 1, 1),
                "Employer",
                "Salary",
                Money::from_units(5000),
            ))
            .unwrap();
        storage
            .expenses
            .insert(expense(date(2025, 1, 10), ExpenseCategory::Housing, 1200))
            .unwrap();
        storage
            .expenses
            .insert(expense(date(2025, 1, 12), ExpenseCategory::Food, 300))
            .unwrap();
        storage
            .budgets
            .set_limit(ExpenseCategory::Housing, Money::from_units(1300))
            .unwrap();
        storage
            .budgets
            .set_limit(ExpenseCategory::Food, Money::from_units(400))
            .unwrap();

        let report = DashboardReport::generate(&storage, jan, date(2025, 1, 31)).unwrap();

        assert_eq!(report.income.cents(), 500_000);
        assert_eq!(report.expense.cents(), 150_000);
        assert_eq!(report.net.cents(), 350_000);
        assert_eq!(report.income_count, 1);
        assert_eq!(report.expense_count, 2);
        assert!((report.savings_rate - 0.7).abs() < 1e-12);
        assert_eq!(report.total_budget.cents(), 170_000);
        assert_eq!(report.budget_remaining.cents(), 20_000);
        assert_eq!(
            report.top_category,
            Some((ExpenseCategory::Housing, Money::from_units(1200)))
        );
    }

    #[test]
    fn test_budget_remaining_goes_negative_when_over() {
        let (_temp_dir, storage) = create_test_storage();
        let jan = Period::month(2025, 1);

        storage
            .budgets
            .set_limit(ExpenseCategory::Food, Money::from_units(100))
            .unwrap();
        storage
            .expenses
            .insert(expense(date(2025, 1, 5), ExpenseCategory::Food, 250))
            .unwrap();

        let report = DashboardReport::generate(&storage, jan, date(2025, 1, 31)).unwrap();
        assert_eq!(report.budget_remaining.cents(), -15_000);
    }

    #[test]
    fn test_empty_month() {
        let (_temp_dir, storage) = create_test_storage();

        let report =
            DashboardReport::generate(&storage, Period::month(2025, 6), date(2025, 6, 15))
                .unwrap();

        assert!(report.income.is_zero());
        assert_eq!(report.savings_rate, 0.0);
        assert_eq!(report.health_score, 0);
        assert!(report.top_category.is_none());
    }
}
