//! Formatting helpers for terminal output
//!
//! Amounts render as the absolute value with thousands separators and the
//! configured currency symbol; the sign is applied contextually by the
//! caller (a leading "+"/"-" or just color in the original).

use crate::models::Money;

/// Group an unsigned digit string with comma separators
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Format an amount as `<symbol> <abs value>`, e.g. "रू 1,234.56"
pub fn format_amount(amount: Money, symbol: &str) -> String {
    let abs = amount.abs();
    format!(
        "{} {}.{:02}",
        symbol,
        group_thousands(&abs.units().to_string()),
        abs.cents_part()
    )
}

/// Format an amount with an explicit sign prefix for variance-style columns
pub fn format_signed(amount: Money, symbol: &str) -> String {
    let formatted = format_amount(amount, symbol);
    if amount.is_negative() {
        format!("-{}", formatted)
    } else if amount.is_positive() {
        format!("+{}", formatted)
    } else {
        formatted
    }
}

/// Format a fraction as a percentage with one decimal, e.g. 0.728 -> "72.8%"
pub fn format_rate(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Format an optional fraction, falling back to a dash
pub fn format_rate_or_dash(fraction: Option<f64>) -> String {
    match fraction {
        Some(f) => format_rate(f),
        None => "–".to_string(),
    }
}

/// Simple bar representation for utilization columns
pub fn format_bar(fraction: f64, width: usize) -> String {
    if fraction <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((fraction.min(1.0)) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
