//! Reporting period representation
//!
//! A period scopes aggregation to a calendar month or a whole year. Dates are
//! `NaiveDate`, so a stored date string maps to exactly one calendar day no
//! matter the host timezone.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month names used when formatting periods and summary rows
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Short month names for compact tables
pub const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A reporting period: a calendar month or a whole year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Period {
    /// A single calendar month (month is 1-12)
    Month { year: i32, month: u32 },

    /// A whole calendar year
    Year { year: i32 },
}

impl Period {
    /// Create a monthly period
    pub fn month(year: i32, month: u32) -> Self {
        Self::Month { year, month }
    }

    /// Create a yearly period
    pub fn year(year: i32) -> Self {
        Self::Year { year }
    }

    /// The current calendar month
    pub fn current_month() -> Self {
        let today = chrono::Local::now().date_naive();
        Self::Month {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::Month { year, month } => date.year() == *year && date.month() == *month,
            Self::Year { year } => date.year() == *year,
        }
    }

    /// The year this period belongs to
    pub fn year_value(&self) -> i32 {
        match self {
            Self::Month { year, .. } => *year,
            Self::Year { year } => *year,
        }
    }

    /// Human-friendly label, e.g. "January 2025" or "2025"
    pub fn label(&self) -> String {
        match self {
            Self::Month { year, month } => {
                format!("{} {}", MONTH_NAMES[(*month - 1) as usize], year)
            }
            Self::Year { year } => year.to_string(),
        }
    }

    /// Parse a period string
    ///
    /// Formats:
    /// - Monthly: "2025-01"
    /// - Yearly: "2025"
    pub fn parse(s: &str) -> Result<Self, PeriodParseError> {
        let s = s.trim();

        let parts: Vec<&str> = s.split('-').collect();
        match parts.len() {
            1 => {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                Ok(Self::Year { year })
            }
            2 => {
                let year: i32 = parts[0]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;
                let month: u32 = parts[1]
                    .parse()
                    .map_err(|_| PeriodParseError::InvalidFormat(s.to_string()))?;

                if !(1..=12).contains(&month) {
                    return Err(PeriodParseError::InvalidMonth(month));
                }

                Ok(Self::Month { year, month })
            }
            _ => Err(PeriodParseError::InvalidFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Month { year, month } => write!(f, "{:04}-{:02}", year, month),
            Self::Year { year } => write!(f, "{:04}", year),
        }
    }
}

/// Error type for period parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::InvalidFormat(s) => write!(f, "Invalid period format: {}", s),
            PeriodParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_contains() {
        let jan = Period::month(2025, 1);
        assert!(jan.contains(date(2025, 1, 1)));
        assert!(jan.contains(date(2025, 1, 31)));
        assert!(!jan.contains(date(2025, 2, 1)));
        assert!(!jan.contains(date(2024, 1, 15)));
    }

    #[test]
    fn test_year_contains() {
        let y = Period::year(2025);
        assert!(y.contains(date(2025, 1, 1)));
        assert!(y.contains(date(2025, 12, 31)));
        assert!(!y.contains(date(2026, 1, 1)));
    }

    #[test]
    fn test_parse_monthly() {
        assert_eq!(Period::parse("2025-01").unwrap(), Period::month(2025, 1));
        assert_eq!(Period::parse("2025-12").unwrap(), Period::month(2025, 12));
    }

    #[test]
    fn test_parse_yearly() {
        assert_eq!(Period::parse("2025").unwrap(), Period::year(2025));
    }

    #[test]
    fn test_parse_invalid_month() {
        assert_eq!(
            Period::parse("2025-13"),
            Err(PeriodParseError::InvalidMonth(13))
        );
        assert_eq!(
            Period::parse("2025-00"),
            Err(PeriodParseError::InvalidMonth(0))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Period::month(2025, 1)), "2025-01");
        assert_eq!(format!("{}", Period::year(2025)), "2025");
    }

    #[test]
    fn test_label() {
        assert_eq!(Period::month(2025, 1).label(), "January 2025");
        assert_eq!(Period::year(2025).label(), "2025");
    }

    #[test]
    fn test_serialization() {
        let period = Period::month(2025, 1);
        let json = serde_json::to_string(&period).unwrap();
        let deserialized: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(period, deserialized);
    }
}
