//! Shared argument parsing helpers for CLI commands

use chrono::NaiveDate;

use crate::error::{FinFlowError, FinFlowResult};
use crate::models::{Money, Period};

/// Parse a date argument (YYYY-MM-DD), defaulting to today
pub fn parse_date_or_today(date: Option<&str>) -> FinFlowResult<NaiveDate> {
    match date {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|_| FinFlowError::Validation(format!("Invalid date (use YYYY-MM-DD): {}", s))),
        None => Ok(today()),
    }
}

/// Parse a period argument ("YYYY-MM" or "YYYY"), defaulting to the current month
pub fn parse_period_or_current_month(period: Option<&str>) -> FinFlowResult<Period> {
    match period {
        Some(s) => {
            Period::parse(s).map_err(|e| FinFlowError::Validation(e.to_string()))
        }
        None => Ok(Period::current_month()),
    }
}

/// Parse a year argument, defaulting to the current year
pub fn parse_year_or_current(year: Option<i32>) -> i32 {
    use chrono::Datelike;
    year.unwrap_or_else(|| today().year())
}

/// Parse a money amount argument
pub fn parse_amount(amount: &str) -> FinFlowResult<Money> {
    Money::parse(amount).map_err(|e| FinFlowError::Validation(e.to_string()))
}

/// The local calendar date
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
