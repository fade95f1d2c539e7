//! Wire types for analysis responses.

use super::{Sentiment, Trend, Volatility};
use serde::{Deserialize, Serialize};

/// Payload of `GET /api/metals/analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub metal: String,
    pub trend: Trend,
    pub volatility: Volatility,
    pub sentiment: Sentiment,
    pub period_start: String,
    pub period_end: String,
}
