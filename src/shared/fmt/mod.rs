//! Display formatting for prices and timestamps.

pub mod num;
pub mod time;

pub use num::display_price;
pub use time::{display_date, display_timestamp};

/// Placeholder shown when a value is missing.
pub const NOT_AVAILABLE: &str = "N/A";
