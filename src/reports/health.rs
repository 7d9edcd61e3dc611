//! Financial health score
//!
//! Blends four banded ratios into a 0-100 composite: savings rate, expense
//! ratio, emergency-fund coverage, and the fixed-expense share. Each band
//! contributes at most 25 points.
//!
//! The emergency fund input is always the ALL-TIME balance of
//! "Emergency Fund" savings, while income, expense, and fixed-expense
//! inputs are period-scoped.

use crate::models::Money;

/// Composite financial health score in [0, 100]
///
/// Returns 0 when both income and expense are zero: no activity is not a
/// perfect score.
pub fn health_score(
    income: Money,
    expense: Money,
    fixed_expense: Money,
    emergency_fund: Money,
) -> u8 {
    if income.is_zero() && expense.is_zero() {
        return 0;
    }

    let income_f = income.as_f64();
    let expense_f = expense.as_f64();

    let savings_rate = if income_f > 0.0 {
        (income_f - expense_f) / income_f
    } else {
        0.0
    };
    let expense_ratio = if income_f > 0.0 {
        expense_f / income_f
    } else {
        1.0
    };
    let coverage_months = if expense_f > 0.0 {
        emergency_fund.as_f64() / expense_f
    } else {
        0.0
    };
    let fixed_ratio = if expense_f > 0.0 {
        fixed_expense.as_f64() / expense_f
    } else {
        0.0
    };

    let mut score: u8 = 0;
    score += savings_rate_band(savings_rate);
    score += expense_ratio_band(expense_ratio);
    score += coverage_band(coverage_months);
    score += fixed_ratio_band(fixed_ratio);
    score
}

fn savings_rate_band(rate: f64) -> u8 {
    if rate >= 0.30 {
        25
    } else if rate >= 0.20 {
        20
    } else if rate >= 0.10 {
        12
    } else if rate >= 0.0 {
        5
    } else {
        0
    }
}

fn expense_ratio_band(ratio: f64) -> u8 {
    if ratio <= 0.50 {
        25
    } else if ratio <= 0.60 {
        20
    } else if ratio <= 0.75 {
        13
    } else if ratio <= 0.90 {
        7
    } else {
        0
    }
}

fn coverage_band(months: f64) -> u8 {
    if months >= 6.0 {
        25
    } else if months >= 4.0 {
        20
    } else if months >= 2.0 {
        12
    } else if months >= 1.0 {
        6
    } else {
        0
    }
}

fn fixed_ratio_band(ratio: f64) -> u8 {
    if ratio <= 0.40 {
        25
    } else if ratio <= 0.55 {
        20
    } else if ratio <= 0.70 {
        12
    } else {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    #[test]
    fn test_no_activity_scores_zero() {
        assert_eq!(
            health_score(Money::zero(), Money::zero(), Money::zero(), Money::zero()),
            0
        );
    }

    #[test]
    fn test_perfect_score() {
        // Savings rate 72%, expense ratio 28%, coverage >6 months, fixed 29%
        let score = health_score(units(5150), units(1400), units(400), units(10000));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_expense_only_month() {
        // No income: savings rate band 5 (rate 0), expense ratio band 0
        // (ratio 1), coverage and fixed depend on the rest
        let score = health_score(Money::zero(), units(1000), units(1000), Money::zero());
        // savings 5 + expense 0 + coverage 0 + fixed (1.0 -> 8)
        assert_eq!(score, 13);
    }

    #[test]
    fn test_score_monotone_in_savings_rate() {
        // Fix expense, raise income: the score never decreases
        let expense = units(1000);
        let mut last = 0;
        for income_units in [1000, 1200, 1500, 2000, 5000] {
            let score = health_score(units(income_units), expense, Money::zero(), Money::zero());
            assert!(score >= last, "score dropped as income rose");
            last = score;
        }
    }

    #[test]
    fn test_score_antitone_in_expense_ratio() {
        // Fix income, raise expense: the score never increases
        let income = units(5000);
        let mut last = 100;
        for expense_units in [1000, 2000, 3000, 4500, 6000] {
            let score = health_score(income, units(expense_units), Money::zero(), Money::zero());
            assert!(score <= last, "score rose as expenses rose");
            last = score;
        }
    }

    #[test]
    fn test_coverage_band_boundaries() {
        assert_eq!(coverage_band(6.0), 25);
        assert_eq!(coverage_band(5.99), 20);
        assert_eq!(coverage_band(4.0), 20);
        assert_eq!(coverage_band(2.0), 12);
        assert_eq!(coverage_band(1.0), 6);
        assert_eq!(coverage_band(0.99), 0);
    }

    #[test]
    fn test_fixed_ratio_band_floor() {
        // The fixed-ratio band never contributes less than 8
        assert_eq!(fixed_ratio_band(1.0), 8);
        assert_eq!(fixed_ratio_band(0.40), 25);
        assert_eq!(fixed_ratio_band(0.55), 20);
        assert_eq!(fixed_ratio_band(0.70), 12);
    }

    #[test]
    fn test_emergency_fund_uses_total_expense_not_average() {
        // Coverage = 6000 / 1000 = 6 months -> 25 points
        let with_fund = health_score(units(5000), units(1000), Money::zero(), units(6000));
        let without = health_score(units(5000), units(1000), Money::zero(), Money::zero());
        assert_eq!(with_fund - without, 25);
    }
}
