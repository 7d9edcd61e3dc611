//! Category enumerations for expenses and goals
//!
//! Engine identity is the enum variant; display labels and icon glyphs are a
//! separate lookup so rendering concerns never leak into calculations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Housing,
    Food,
    Transport,
    Utilities,
    Health,
    Entertainment,
    Shopping,
    Education,
    Insurance,
    #[serde(rename = "Debt Payment")]
    DebtPayment,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Other,
}

impl ExpenseCategory {
    /// All categories in budget-table order
    pub const ALL: [ExpenseCategory; 12] = [
        Self::Housing,
        Self::Food,
        Self::Transport,
        Self::Utilities,
        Self::Health,
        Self::Entertainment,
        Self::Shopping,
        Self::Education,
        Self::Insurance,
        Self::DebtPayment,
        Self::PersonalCare,
        Self::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Insurance => "Insurance",
            Self::DebtPayment => "Debt Payment",
            Self::PersonalCare => "Personal Care",
            Self::Other => "Other",
        }
    }

    /// Icon glyph for terminal display
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Housing => "🏠",
            Self::Food => "🍔",
            Self::Transport => "🚗",
            Self::Utilities => "💡",
            Self::Health => "💊",
            Self::Entertainment => "🎬",
            Self::Shopping => "🛍️",
            Self::Education => "📚",
            Self::Insurance => "🛡️",
            Self::DebtPayment => "💳",
            Self::PersonalCare => "🪥",
            Self::Other => "📦",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| CategoryParseError::UnknownCategory(s.to_string()))
    }
}

/// Categories for financial goals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GoalCategory {
    #[serde(rename = "Emergency Fund")]
    EmergencyFund,
    Retirement,
    Vacation,
    House,
    Car,
    Education,
    Other,
}

impl GoalCategory {
    pub const ALL: [GoalCategory; 7] = [
        Self::EmergencyFund,
        Self::Retirement,
        Self::Vacation,
        Self::House,
        Self::Car,
        Self::Education,
        Self::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "Emergency Fund",
            Self::Retirement => "Retirement",
            Self::Vacation => "Vacation",
            Self::House => "House",
            Self::Car => "Car",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Icon glyph for terminal display
    pub fn icon(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "🆘",
            Self::Retirement => "🏖️",
            Self::Vacation => "✈️",
            Self::House => "🏡",
            Self::Car => "🚘",
            Self::Education => "🎓",
            Self::Other => "🏆",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GoalCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .copied()
            .ok_or_else(|| CategoryParseError::UnknownCategory(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    UnknownCategory(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::UnknownCategory(s) => write!(f, "Unknown category: {}", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
