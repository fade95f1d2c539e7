//! The view state container.

use crate::domain::analysis::AnalysisPanel;
use crate::domain::health::HealthStatus;
use crate::domain::history::{Filter, HistoryChart};
use crate::domain::price::PriceBoard;
use crate::domain::update::UpdatePanel;

/// Everything the view renders from. One instance per mounted view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub filter: Filter,
    /// `None` until the first probe completes.
    pub health: Option<HealthStatus>,
    pub prices: PriceBoard,
    pub history: HistoryChart,
    pub update: UpdatePanel,
    pub analysis: AnalysisPanel,
}

impl ViewState {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Whether any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.prices.is_loading()
            || self.history.is_loading()
            || self.update.is_updating()
            || self.analysis.is_loading()
    }
}
