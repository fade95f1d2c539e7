//! Timestamp formatting for tables and chart axes.

use super::NOT_AVAILABLE;
use chrono::{DateTime, Utc};

/// Full timestamp for a table cell; missing values render as `N/A`.
pub fn display_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    match timestamp {
        Some(ts) => ts.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Date-only label for a chart axis tick.
pub fn display_date(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}
