//! Analysis domain — the backend's 30-day trend, volatility and sentiment
//! verdict for a metal.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod state;
pub mod wire;

pub use state::AnalysisPanel;

use crate::shared::MetalSymbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Unchanged,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Volatility {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Analysis of one metal over a period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetalAnalysis {
    pub metal: MetalSymbol,
    pub trend: Trend,
    pub volatility: Volatility,
    pub sentiment: Sentiment,
    pub period_start: DateTime<Utc>,
    pub period_end: DateTime<Utc>,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Unchanged => write!(f, "unchanged"),
        }
    }
}

impl fmt::Display for Volatility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Volatility::High => write!(f, "high"),
            Volatility::Medium => write!(f, "medium"),
            Volatility::Low => write!(f, "low"),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    InvalidPeriod(String),
    PeriodReversed,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidPeriod(raw) => write!(f, "invalid period bound {:?}", raw),
            ValidationError::PeriodReversed => write!(f, "period ends before it starts"),
        }
    }
}

impl std::error::Error for ValidationError {}
