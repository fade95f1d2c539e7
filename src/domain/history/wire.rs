//! Wire types for price history responses.

use serde::{Deserialize, Serialize};

/// One entry of `GET /api/metals/history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPriceResponse {
    pub price: f64,
    pub timestamp: String,
}
