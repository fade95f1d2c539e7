//! Wire types for current price responses.

use serde::{Deserialize, Serialize};

/// One entry of `GET /api/metals/current`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalPriceResponse {
    pub symbol: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub timestamp: Option<String>,
}
