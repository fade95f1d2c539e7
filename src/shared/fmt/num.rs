//! Number formatting utilities for human-readable display.
//!
//! Prices are shown with up to two decimals, trailing zeros trimmed, and
//! comma thousands separators.

use super::NOT_AVAILABLE;

/// Insert comma separators into a run of integer digits (optionally signed).
pub fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    format!("{}{}", sign, grouped)
}

/// Format an f64 with at most `decimals` fraction digits.
pub fn display_with_decimals(amount: f64, decimals: usize) -> String {
    let formatted = format!("{:.1$}", amount, decimals);
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i, f.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    // `-0.001` rounds to `-0`
    let integer = if integer == "-0" && fraction.is_empty() {
        "0"
    } else {
        integer
    };

    let grouped = group_thousands(integer);
    if fraction.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, fraction)
    }
}

/// Format an optional price; missing or non-finite values render as `N/A`.
pub fn display_price(price: Option<f64>) -> String {
    match price {
        Some(p) if p.is_finite() => display_with_decimals(p, 2),
        _ => NOT_AVAILABLE.to_string(),
    }
}
