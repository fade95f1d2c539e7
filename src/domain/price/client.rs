//! Prices sub-client — current spot quotes.

use crate::client::MetalsClient;
use crate::domain::price::PriceQuote;
use crate::error::SdkError;
use crate::shared::CurrencyCode;

/// Sub-client for current price queries.
pub struct Prices<'a> {
    pub(crate) client: &'a MetalsClient,
}

impl<'a> Prices<'a> {
    /// Current prices for every tracked metal, quoted in `currency`.
    pub async fn current(&self, currency: &CurrencyCode) -> Result<Vec<PriceQuote>, SdkError> {
        let envelope = self.client.http.get_current_prices(currency).await?;
        envelope
            .into_data()?
            .into_iter()
            .map(|r| PriceQuote::try_from(r).map_err(|e| SdkError::Validation(e.to_string())))
            .collect()
    }
}
