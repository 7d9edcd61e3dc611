//! Debt payoff projection
//!
//! Closed-form amortization for months-to-payoff plus avalanche ranking.
//! Ranking is a display artifact: it orders debts by interest rate but never
//! reallocates payments between them.

use std::fmt;

use crate::error::FinFlowResult;
use crate::models::{Debt, DebtId, Money};
use crate::storage::Storage;

/// Months until a debt is paid off, or never
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payoff {
    Months(u32),
    /// The payment never amortizes the balance
    Never,
}

impl Payoff {
    pub fn is_never(&self) -> bool {
        matches!(self, Self::Never)
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Months(n) => write!(f, "{}mo", n),
            Self::Never => write!(f, "never"),
        }
    }
}

/// Months to pay off a balance with a fixed monthly payment
///
/// Uses the closed-form amortization formula
/// `n = -ln(1 - r*B/P) / ln(1 + r)` with monthly rate `r`, not an iterative
/// simulation. Zero interest degenerates to `ceil(B/P)`. Returns
/// [`Payoff::Never`] when the payment is non-positive or never covers the
/// accruing interest.
pub fn months_to_payoff(balance: Money, annual_rate_percent: f64, payment: Money) -> Payoff {
    let payment = payment.as_f64();
    if payment <= 0.0 {
        return Payoff::Never;
    }

    let balance = balance.as_f64();
    let monthly_rate = annual_rate_percent / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return Payoff::Months((balance / payment).ceil() as u32);
    }

    let ln_arg = 1.0 - monthly_rate * balance / payment;
    if ln_arg <= 0.0 {
        return Payoff::Never;
    }

    let n = -ln_arg.ln() / (1.0 + monthly_rate).ln();
    if n.is_finite() && n > 0.0 {
        Payoff::Months(n.ceil() as u32)
    } else {
        Payoff::Never
    }
}

/// 1-based avalanche rank for each debt, indexed by insertion position
///
/// Debts are ranked by descending interest rate; ties keep their relative
/// insertion order (stable sort).
pub fn avalanche_ranks(debts: &[Debt]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..debts.len()).collect();
    order.sort_by(|&a, &b| {
        debts[b]
            .annual_rate_percent
            .total_cmp(&debts[a].annual_rate_percent)
    });

    let mut ranks = vec![0; debts.len()];
    for (rank, &index) in order.iter().enumerate() {
        ranks[index] = rank + 1;
    }
    ranks
}

/// Payoff projection for one debt
#[derive(Debug, Clone)]
pub struct DebtPayoffRow {
    /// Debt ID
    pub id: DebtId,
    /// Debt name
    pub name: String,
    /// Lender
    pub lender: String,
    /// Current balance
    pub balance: Money,
    /// Annual interest rate percent
    pub annual_rate_percent: f64,
    /// Minimum monthly payment
    pub minimum_payment: Money,
    /// Total monthly payment (minimum + extra)
    pub monthly_payment: Money,
    /// Interest accrued per month at the current balance
    pub monthly_interest: Money,
    /// Projected months to payoff
    pub months: Payoff,
    /// 1-based avalanche rank
    pub avalanche_rank: usize,
}

/// Debt payoff report: one row per debt in insertion order, plus totals
#[derive(Debug, Clone)]
pub struct DebtPayoffReport {
    pub rows: Vec<DebtPayoffRow>,
    /// Sum of balances
    pub total_balance: Money,
    /// Sum of per-debt monthly interest
    pub total_monthly_interest: Money,
    /// Sum of per-debt monthly payments
    pub total_monthly_payment: Money,
}

impl DebtPayoffReport {
    /// Generate the payoff report over all stored debts
    pub fn generate(storage: &Storage) -> FinFlowResult<Self> {
        let debts = storage.debts.all()?;
        Ok(Self::from_debts(&debts))
    }

    /// Build the report from a debt snapshot
    pub fn from_debts(debts: &[Debt]) -> Self {
        let ranks = avalanche_ranks(debts);

        let mut total_balance = Money::zero();
        let mut total_monthly_interest = Money::zero();
        let mut total_monthly_payment = Money::zero();

        let rows = debts
            .iter()
            .zip(ranks)
            .map(|(debt, rank)| {
                let monthly_payment = debt.monthly_payment();
                let monthly_interest = debt.monthly_interest();

                total_balance += debt.balance;
                total_monthly_interest += monthly_interest;
                total_monthly_payment += monthly_payment;

                DebtPayoffRow {
                    id: debt.id,
                    name: debt.name.clone(),
                    lender: debt.lender.clone(),
                    balance: debt.balance,
                    annual_rate_percent: debt.annual_rate_percent,
                    minimum_payment: debt.minimum_payment,
                    monthly_payment,
                    monthly_interest,
                    months: months_to_payoff(
                        debt.balance,
                        debt.annual_rate_percent,
                        monthly_payment,
                    ),
                    avalanche_rank: rank,
                }
            })
            .collect();

        Self {
            rows,
            total_balance,
            total_monthly_interest,
            total_monthly_payment,
        }
    }
}
