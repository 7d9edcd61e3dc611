//! Debt model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DebtId;
use super::money::Money;

/// An outstanding debt with its payment plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Unique identifier
    pub id: DebtId,

    /// Debt name, e.g. "Credit Card"
    pub name: String,

    /// Who the money is owed to
    #[serde(default)]
    pub lender: String,

    /// Current balance
    pub balance: Money,

    /// Annual interest rate in percent, e.g. 22.0 for 22% APR
    pub annual_rate_percent: f64,

    /// Minimum monthly payment
    #[serde(default)]
    pub minimum_payment: Money,

    /// Extra monthly payment on top of the minimum
    #[serde(default)]
    pub extra_payment: Money,
}

impl Debt {
    /// Create a new debt
    pub fn new(
        name: impl Into<String>,
        balance: Money,
        annual_rate_percent: f64,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: DebtId::new(),
            name: name.into(),
            lender: String::new(),
            balance,
            annual_rate_percent,
            minimum_payment,
            extra_payment: Money::zero(),
        }
    }

    /// Set the lender, builder style
    pub fn with_lender(mut self, lender: impl Into<String>) -> Self {
        self.lender = lender.into();
        self
    }

    /// Set the extra payment, builder style
    pub fn with_extra_payment(mut self, extra: Money) -> Self {
        self.extra_payment = extra;
        self
    }

    /// Total monthly payment: minimum plus extra
    pub fn monthly_payment(&self) -> Money {
        self.minimum_payment + self.extra_payment
    }

    /// Monthly interest rate as a fraction (annual percent / 100 / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.annual_rate_percent / 100.0 / 12.0
    }

    /// Interest accrued in one month at the current balance (simple, not
    /// compounded within the month)
    pub fn monthly_interest(&self) -> Money {
        Money::from_cents((self.balance.cents() as f64 * self.monthly_rate()).round() as i64)
    }

    /// Validate the debt before it enters the store
    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        if self.balance.is_negative() {
            return Err(DebtValidationError::NegativeBalance);
        }
        if self.annual_rate_percent < 0.0 || !self.annual_rate_percent.is_finite() {
            return Err(DebtValidationError::InvalidRate);
        }
        if self.minimum_payment.is_negative() || self.extra_payment.is_negative() {
            return Err(DebtValidationError::NegativePayment);
        }
        Ok(())
    }
}

impl fmt::Display for Debt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {:.2}%",
            self.name, self.balance, self.annual_rate_percent
        )
    }
}

/// Validation errors for debts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeBalance,
    InvalidRate,
    NegativePayment,
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt name cannot be empty"),
            Self::NegativeBalance => write!(f, "Debt balance cannot be negative"),
            Self::InvalidRate => write!(f, "Interest rate must be a non-negative number"),
            Self::NegativePayment => write!(f, "Payments cannot be negative"),
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monthly_payment() {
        let debt = Debt::new(
            "Credit Card",
            Money::from_units(2400),
            22.0,
            Money::from_units(50),
        )
        .with_extra_payment(Money::from_units(200));

        assert_eq!(debt.monthly_payment().cents(), 25000);
    }

    #[test]
    fn test_monthly_rate_and_interest() {
        let debt = Debt::new(
            "Credit Card",
            Money::from_units(2400),
            22.0,
            Money::from_units(50),
        );

        let r = debt.monthly_rate();
        assert!((r - 22.0 / 100.0 / 12.0).abs() < 1e-12);

        // 2400 * 0.0183... = 44.00
        assert_eq!(debt.monthly_interest().cents(), 4400);
    }

    #[test]
    fn test_zero_rate_has_zero_interest() {
        let debt = Debt::new("Loan", Money::from_units(1000), 0.0, Money::from_units(100));
        assert!(debt.monthly_interest().is_zero());
    }

    #[test]
    fn test_validation() {
        let ok = Debt::new("Loan", Money::from_units(1000), 5.5, Money::from_units(100));
        assert!(ok.validate().is_ok());

        let unnamed = Debt::new("", Money::from_units(1000), 5.5, Money::from_units(100));
        assert_eq!(unnamed.validate(), Err(DebtValidationError::EmptyName));

        let bad_rate = Debt::new("Loan", Money::from_units(1000), -1.0, Money::from_units(100));
        assert_eq!(bad_rate.validate(), Err(DebtValidationError::InvalidRate));
    }

    #[test]
    fn test_serialization() {
        let debt = Debt::new(
            "Student Loan",
            Money::from_units(18000),
            5.5,
            Money::from_units(210),
        )
        .with_lender("Gov. Fund");
        let json = serde_json::to_string(&debt).unwrap();
        let deserialized: Debt = serde_json::from_str(&json).unwrap();
        assert_eq!(debt.id, deserialized.id);
        assert_eq!(debt.balance, deserialized.balance);
        assert_eq!(debt.annual_rate_percent, deserialized.annual_rate_percent);
    }
}
