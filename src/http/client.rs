//! Low-level HTTP client — `MetalsHttp`.
//!
//! One method per API endpoint. Returns wire envelopes (conversion to domain
//! types happens in the sub-clients). Requests are sent once; there is no
//! retry layer.

use crate::domain::analysis::wire::AnalysisResponse;
use crate::domain::envelope::Envelope;
use crate::domain::history::wire::HistoricalPriceResponse;
use crate::domain::history::HistoryQuery;
use crate::domain::price::wire::MetalPriceResponse;
use crate::error::HttpError;
use crate::shared::{CurrencyCode, MetalSymbol};

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the metals REST API.
#[derive(Clone)]
pub struct MetalsHttp {
    base_url: String,
    client: Client,
}

impl MetalsHttp {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Prices ───────────────────────────────────────────────────────────

    pub async fn get_current_prices(
        &self,
        currency: &CurrencyCode,
    ) -> Result<Envelope<Vec<MetalPriceResponse>>, HttpError> {
        let url = format!(
            "{}/api/metals/current?currency={}",
            self.base_url,
            urlencoding::encode(currency.as_str())
        );
        self.get(&url).await
    }

    // ── History ──────────────────────────────────────────────────────────

    pub async fn get_history(
        &self,
        query: &HistoryQuery,
    ) -> Result<Envelope<Vec<HistoricalPriceResponse>>, HttpError> {
        let url = format!(
            "{}/api/metals/history?metal={}&date_from={}&date_to={}",
            self.base_url,
            urlencoding::encode(query.metal.as_str()),
            query.date_from.format("%Y-%m-%d"),
            query.date_to.format("%Y-%m-%d")
        );
        self.get(&url).await
    }

    // ── Analysis ─────────────────────────────────────────────────────────

    pub async fn get_analysis(
        &self,
        metal: &MetalSymbol,
    ) -> Result<Envelope<AnalysisResponse>, HttpError> {
        let url = format!(
            "{}/api/metals/analysis?metal={}",
            self.base_url,
            urlencoding::encode(metal.as_str())
        );
        self.get(&url).await
    }

    // ── Backend maintenance ──────────────────────────────────────────────

    /// Ask the backend to re-scrape prices. Sent without a body.
    pub async fn post_update(&self) -> Result<Envelope<serde_json::Value>, HttpError> {
        let url = format!("{}/api/metals/update", self.base_url);
        self.request(reqwest::Method::POST, &url).await
    }

    /// `Ok` for any 2xx answer; the body is not inspected.
    pub async fn probe_health(&self) -> Result<(), HttpError> {
        let url = format!("{}/api/health", self.base_url);
        tracing::debug!("probe_health | url: {}", url);
        let resp = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(status_error(status.as_u16(), body))
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.request(reqwest::Method::GET, url).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        url: &str,
    ) -> Result<T, HttpError> {
        tracing::debug!(method = %method, "request | url: {}", url);

        let resp = self
            .client
            .request(method, url)
            .send()
            .await
            .map_err(transport_error)?;
        let status = resp.status();
        let body = resp.text().await.map_err(transport_error)?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(HttpError::Decode);
        }

        Err(status_error(status.as_u16(), body))
    }
}

fn transport_error(e: reqwest::Error) -> HttpError {
    if e.is_timeout() {
        HttpError::Timeout
    } else {
        HttpError::Reqwest(e)
    }
}

fn status_error(status: u16, body: String) -> HttpError {
    match status {
        404 => HttpError::NotFound(body),
        400..=499 => HttpError::BadRequest { status, body },
        _ => HttpError::ServerError { status, body },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_mapping() {
        assert!(matches!(status_error(404, String::new()), HttpError::NotFound(_)));
        assert!(matches!(
            status_error(422, String::new()),
            HttpError::BadRequest { status: 422, .. }
        ));
        assert!(matches!(
            status_error(500, String::new()),
            HttpError::ServerError { status: 500, .. }
        ));
        // 3xx that reqwest did not follow still counts as a failure
        assert_eq!(status_error(304, String::new()).status(), Some(304));
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let http = MetalsHttp::new("http://localhost:5000/", Duration::from_secs(1)).unwrap();
        assert_eq!(http.base_url(), "http://localhost:5000");
    }
}
