//! Conversion: AnalysisResponse → MetalAnalysis.

use super::wire::AnalysisResponse;
use super::{MetalAnalysis, ValidationError};
use crate::shared::time::parse_iso_timestamp;
use crate::shared::MetalSymbol;

impl TryFrom<AnalysisResponse> for MetalAnalysis {
    type Error = ValidationError;

    fn try_from(source: AnalysisResponse) -> Result<Self, Self::Error> {
        let period_start = parse_iso_timestamp(&source.period_start)
            .ok_or(ValidationError::InvalidPeriod(source.period_start))?;
        let period_end = parse_iso_timestamp(&source.period_end)
            .ok_or(ValidationError::InvalidPeriod(source.period_end))?;
        if period_end < period_start {
            return Err(ValidationError::PeriodReversed);
        }

        Ok(MetalAnalysis {
            metal: MetalSymbol::new(&source.metal),
            trend: source.trend,
            volatility: source.volatility,
            sentiment: source.sentiment,
            period_start,
            period_end,
        })
    }
}
