//! Price history domain — chronological price series for one metal.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod filter;
pub mod state;
pub mod wire;

pub use filter::{Filter, FilterError, HistoryQuery};
pub use state::HistoryChart;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One observation in a history series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub price: f64,
    pub observed_at: DateTime<Utc>,
}

/// A single data point on a price chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineData {
    /// Unix timestamp in milliseconds.
    pub time: i64,
    pub value: f64,
}

impl From<HistoricalPoint> for LineData {
    fn from(p: HistoricalPoint) -> Self {
        Self {
            time: p.observed_at.timestamp_millis(),
            value: p.price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidPrice(f64),
    InvalidTimestamp(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPrice(p) => write!(f, "invalid history price {}", p),
            ValidationError::InvalidTimestamp(raw) => {
                write!(f, "invalid history timestamp {:?}", raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
