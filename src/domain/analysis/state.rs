//! Analysis state slot.

use super::MetalAnalysis;
use crate::shared::{MetalSymbol, RequestState};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisPanel {
    metal: Option<MetalSymbol>,
    analysis: Option<MetalAnalysis>,
    loading: bool,
    error: Option<String>,
}

impl AnalysisPanel {
    pub fn begin(&mut self, metal: MetalSymbol) {
        self.metal = Some(metal);
        self.loading = true;
        self.error = None;
    }

    pub fn apply_analysis(&mut self, analysis: MetalAnalysis) {
        self.analysis = Some(analysis);
        self.error = None;
        self.loading = false;
    }

    /// Record a failure. A previous analysis for a different metal is dropped
    /// so it is never shown under the wrong heading.
    pub fn apply_error(&mut self, message: String) {
        if self.analysis.as_ref().map(|a| &a.metal) != self.metal.as_ref() {
            self.analysis = None;
        }
        self.error = Some(message);
        self.loading = false;
    }

    pub fn metal(&self) -> Option<&MetalSymbol> {
        self.metal.as_ref()
    }

    pub fn analysis(&self) -> Option<&MetalAnalysis> {
        self.analysis.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn request_state(&self) -> RequestState<&MetalAnalysis> {
        RequestState::derive(self.loading, self.error.as_deref(), self.analysis.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::{Sentiment, Trend, Volatility};
    use chrono::{TimeZone, Utc};

    fn analysis(metal: &str) -> MetalAnalysis {
        MetalAnalysis {
            metal: MetalSymbol::from(metal),
            trend: Trend::Down,
            volatility: Volatility::High,
            sentiment: Sentiment::Neutral,
            period_start: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
            period_end: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_apply_analysis() {
        let mut panel = AnalysisPanel::default();
        panel.begin(MetalSymbol::from("GOLD"));
        assert!(panel.request_state().is_loading());
        panel.apply_analysis(analysis("GOLD"));
        assert_eq!(panel.request_state().data().map(|a| a.trend), Some(Trend::Down));
    }

    #[test]
    fn test_error_for_other_metal_drops_old_analysis() {
        let mut panel = AnalysisPanel::default();
        panel.begin(MetalSymbol::from("GOLD"));
        panel.apply_analysis(analysis("GOLD"));
        panel.begin(MetalSymbol::from("SILVER"));
        panel.apply_error("No data available for metal: SILVER".to_string());
        assert!(panel.analysis().is_none());
        assert_eq!(panel.error(), Some("No data available for metal: SILVER"));
    }

    #[test]
    fn test_error_for_same_metal_keeps_old_analysis() {
        let mut panel = AnalysisPanel::default();
        panel.begin(MetalSymbol::from("GOLD"));
        panel.apply_analysis(analysis("GOLD"));
        panel.begin(MetalSymbol::from("GOLD"));
        panel.apply_error("boom".to_string());
        assert!(panel.analysis().is_some());
    }
}
