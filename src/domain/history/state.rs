//! History state slot — owned by the view state, updated by the synchronizer.

use super::{HistoricalPoint, HistoryQuery, LineData};
use crate::shared::RequestState;

/// The chart panel: the last loaded series plus request status.
///
/// `notice` is informational (e.g. an empty range) and never blocks a new
/// query; `error` is for failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryChart {
    query: Option<HistoryQuery>,
    pending: Option<HistoryQuery>,
    points: Vec<HistoricalPoint>,
    loaded: bool,
    loading: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl HistoryChart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a history request as started.
    pub fn begin(&mut self, query: HistoryQuery) {
        self.pending = Some(query);
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    /// Replace the series. An empty series sets `notice` instead of an error.
    pub fn apply_points(&mut self, points: Vec<HistoricalPoint>, empty_notice: &str) {
        self.notice = points.is_empty().then(|| empty_notice.to_string());
        if let Some(query) = self.pending.take() {
            self.query = Some(query);
        }
        self.points = points;
        self.loaded = true;
        self.error = None;
        self.loading = false;
    }

    /// Record a failed request. The previous series and its query are left
    /// as they were.
    pub fn apply_error(&mut self, message: String) {
        self.pending = None;
        self.error = Some(message);
        self.notice = None;
        self.loading = false;
    }

    /// Reject a query before it is sent (incomplete filter).
    pub fn reject(&mut self, message: String) {
        self.apply_error(message);
    }

    /// The query the displayed series belongs to.
    pub fn query(&self) -> Option<&HistoryQuery> {
        self.query.as_ref()
    }

    /// The query currently loading, if any.
    pub fn pending(&self) -> Option<&HistoryQuery> {
        self.pending.as_ref()
    }

    pub fn points(&self) -> &[HistoricalPoint] {
        &self.points
    }

    /// Points in chart form (millisecond time, value).
    pub fn line_data(&self) -> Vec<LineData> {
        self.points.iter().copied().map(LineData::from).collect()
    }

    /// Lowest and highest price in the series.
    pub fn price_range(&self) -> Option<(f64, f64)> {
        self.points.iter().fold(None, |range, p| match range {
            None => Some((p.price, p.price)),
            Some((lo, hi)) => Some((lo.min(p.price), hi.max(p.price))),
        })
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn request_state(&self) -> RequestState<&[HistoricalPoint]> {
        let data = self.loaded.then_some(self.points.as_slice());
        RequestState::derive(self.loading, self.error.as_deref(), data)
    }
}
