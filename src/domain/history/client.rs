//! History sub-client — price series over a date range.

use crate::client::MetalsClient;
use crate::domain::history::{HistoricalPoint, HistoryQuery};
use crate::error::SdkError;

/// Sub-client for price history queries.
pub struct History<'a> {
    pub(crate) client: &'a MetalsClient,
}

impl<'a> History<'a> {
    /// Price series for the query's metal and range, oldest first.
    pub async fn get(&self, query: &HistoryQuery) -> Result<Vec<HistoricalPoint>, SdkError> {
        let envelope = self.client.http.get_history(query).await?;
        let mut points = envelope
            .into_data()?
            .into_iter()
            .map(|r| {
                HistoricalPoint::try_from(r).map_err(|e| SdkError::Validation(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        points.sort_by_key(|p| p.observed_at);
        Ok(points)
    }
}
