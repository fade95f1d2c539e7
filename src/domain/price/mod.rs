//! Current price domain — spot quotes for every tracked metal.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use state::PriceBoard;

use crate::shared::MetalSymbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single metal's latest price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub symbol: MetalSymbol,
    pub display_name: String,
    /// `None` when the backend has no price for the metal yet.
    pub price: Option<f64>,
    /// Price unit, e.g. `"USD/oz"`.
    pub unit: String,
    pub observed_at: Option<DateTime<Utc>>,
}

impl PriceQuote {
    /// Currency part of the unit (`"USD/oz"` → `"USD"`).
    pub fn unit_currency(&self) -> &str {
        self.unit.split('/').next().unwrap_or_default().trim()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    MissingSymbol,
    MissingUnit { symbol: String },
    InvalidPrice { symbol: String, price: f64 },
    InvalidTimestamp { symbol: String, raw: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingSymbol => write!(f, "quote has no symbol"),
            ValidationError::MissingUnit { symbol } => write!(f, "{}: missing unit", symbol),
            ValidationError::InvalidPrice { symbol, price } => {
                write!(f, "{}: invalid price {}", symbol, price)
            }
            ValidationError::InvalidTimestamp { symbol, raw } => {
                write!(f, "{}: invalid timestamp {:?}", symbol, raw)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
