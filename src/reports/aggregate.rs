//! Aggregation primitives
//!
//! Folds over record slices: period totals, category breakdowns, and the
//! fixed/variable split. Everything here is a pure function; no rounding is
//! applied mid-computation because amounts are integer cents.

use std::collections::BTreeMap;

use crate::models::{ExpenseCategory, ExpenseKind, ExpenseRecord, IncomeRecord, Money, SavingsRecord};

/// Any record with a monetary amount
pub trait HasAmount {
    fn amount(&self) -> Money;
}

impl HasAmount for IncomeRecord {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl HasAmount for ExpenseRecord {
    fn amount(&self) -> Money {
        self.amount
    }
}

impl HasAmount for SavingsRecord {
    fn amount(&self) -> Money {
        self.amount
    }
}

/// Sum of all record amounts
pub fn total<T: HasAmount>(records: &[T]) -> Money {
    records.iter().map(|r| r.amount()).sum()
}

/// Per-category expense totals. Sparse: categories with no spend are absent.
pub fn total_by_category(expenses: &[ExpenseRecord]) -> BTreeMap<ExpenseCategory, Money> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        let entry = totals.entry(expense.category).or_insert_with(Money::zero);
        *entry += expense.amount;
    }

    totals
}

/// Sum of expenses with the given fixed/variable flag
pub fn total_by_kind(expenses: &[ExpenseRecord], kind: ExpenseKind) -> Money {
    expenses
        .iter()
        .filter(|e| e.kind == kind)
        .map(|e| e.amount)
        .sum()
}

/// The category with the largest spend, if any records exist
pub fn top_category(expenses: &[ExpenseRecord]) -> Option<(ExpenseCategory, Money)> {
    total_by_category(expenses)
        .into_iter()
        .fold(None, |best, (category, amount)| match best {
            Some((_, best_amount)) if best_amount >= amount => best,
            _ => Some((category, amount)),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(category: ExpenseCategory, units: i64, kind: ExpenseKind) -> ExpenseRecord {
        ExpenseRecord::new(date(2025, 1, 10), category, Money::from_units(units), kind)
    }

    #[test]
    fn test_total() {
        let records = vec![
            IncomeRecord::new(date(2025, 1, 1), "A", "Salary", Money::from_units(4500)),
            IncomeRecord::new(date(2025, 1, 10), "B", "Freelance", Money::from_units(650)),
        ];
        assert_eq!(total(&records).cents(), 515_000);
    }

    #[test]
    fn test_total_empty_is_zero() {
        let records: Vec<IncomeRecord> = Vec::new();
        assert!(total(&records).is_zero());
    }

    #[test]
    fn test_total_by_category_is_sparse() {
        let expenses = vec![
            expense(ExpenseCategory::Food, 200, ExpenseKind::Variable),
            expense(ExpenseCategory::Food, 80, ExpenseKind::Variable),
            expense(ExpenseCategory::Housing, 1200, ExpenseKind::Fixed),
        ];

        let by_cat = total_by_category(&expenses);
        assert_eq!(by_cat.len(), 2);
        assert_eq!(by_cat[&ExpenseCategory::Food].cents(), 28_000);
        assert_eq!(by_cat[&ExpenseCategory::Housing].cents(), 120_000);
        assert!(!by_cat.contains_key(&ExpenseCategory::Transport));
    }

    #[test]
    fn test_total_by_kind() {
        let expenses = vec![
            expense(ExpenseCategory::Housing, 1200, ExpenseKind::Fixed),
            expense(ExpenseCategory::Food, 200, ExpenseKind::Variable),
            expense(ExpenseCategory::Utilities, 55, ExpenseKind::Fixed),
        ];

        assert_eq!(
            total_by_kind(&expenses, ExpenseKind::Fixed).cents(),
            125_500
        );
        assert_eq!(
            total_by_kind(&expenses, ExpenseKind::Variable).cents(),
            20_000
        );
    }

    #[test]
    fn test_top_category() {
        let expenses = vec![
            expense(ExpenseCategory::Food, 200, ExpenseKind::Variable),
            expense(ExpenseCategory::Housing, 1200, ExpenseKind::Fixed),
            expense(ExpenseCategory::Food, 80, ExpenseKind::Variable),
        ];

        let (category, amount) = top_category(&expenses).unwrap();
        assert_eq!(category, ExpenseCategory::Housing);
        assert_eq!(amount.cents(), 120_000);
    }

    #[test]
    fn test_top_category_empty() {
        assert!(top_category(&[]).is_none());
    }

    #[test]
    fn test_order_independence() {
        let mut expenses = vec![
            expense(ExpenseCategory::Food, 200, ExpenseKind::Variable),
            expense(ExpenseCategory::Housing, 1200, ExpenseKind::Fixed),
            expense(ExpenseCategory::Food, 80, ExpenseKind::Variable),
        ];
        let forward = total_by_category(&expenses);
        expenses.reverse();
        let backward = total_by_category(&expenses);
        assert_eq!(forward, backward);
    }
}
