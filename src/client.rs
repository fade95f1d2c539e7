//! High-level client — `MetalsClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, the accessors, and the `MetalsApi`
//! implementation the synchronizer runs on.

use crate::config::Config;
use crate::domain::analysis::client::Analysis;
use crate::domain::analysis::MetalAnalysis;
use crate::domain::health::client::Health;
use crate::domain::history::client::History;
use crate::domain::history::{HistoricalPoint, HistoryQuery};
use crate::domain::price::client::Prices;
use crate::domain::price::PriceQuote;
use crate::domain::update::client::Updates;
use crate::error::SdkError;
use crate::http::MetalsHttp;
use crate::shared::{CurrencyCode, MetalSymbol};
use crate::sync::MetalsApi;

use async_trait::async_trait;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::analysis::client::Analysis as AnalysisClient;
pub use crate::domain::health::client::Health as HealthClient;
pub use crate::domain::history::client::History as HistoryClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::update::client::Updates as UpdatesClient;

/// The primary entry point for talking to the metals backend.
///
/// Provides nested sub-client accessors for each domain:
/// `client.prices()`, `client.history()`, etc.
#[derive(Clone)]
pub struct MetalsClient {
    pub(crate) http: MetalsHttp,
}

impl MetalsClient {
    pub fn builder() -> MetalsClientBuilder {
        MetalsClientBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    pub fn history(&self) -> History<'_> {
        History { client: self }
    }

    pub fn health(&self) -> Health<'_> {
        Health { client: self }
    }

    pub fn updates(&self) -> Updates<'_> {
        Updates { client: self }
    }

    pub fn analysis(&self) -> Analysis<'_> {
        Analysis { client: self }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MetalsApi for MetalsClient {
    async fn current_prices(&self, currency: &CurrencyCode) -> Result<Vec<PriceQuote>, SdkError> {
        self.prices().current(currency).await
    }

    async fn history(&self, query: &HistoryQuery) -> Result<Vec<HistoricalPoint>, SdkError> {
        MetalsClient::history(self).get(query).await
    }

    async fn probe_health(&self) -> Result<(), SdkError> {
        self.health().probe().await
    }

    async fn trigger_update(&self) -> Result<String, SdkError> {
        self.updates().trigger().await
    }

    async fn analysis(&self, metal: &MetalSymbol) -> Result<MetalAnalysis, SdkError> {
        MetalsClient::analysis(self).get(metal).await
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MetalsClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl Default for MetalsClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl MetalsClientBuilder {
    /// Start from a loaded [`Config`].
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: config.timeout,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Per-request timeout (native only; browsers apply their own).
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MetalsClient, SdkError> {
        let base_url = self.base_url.trim();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "base URL must start with http:// or https://, got {:?}",
                base_url
            )));
        }

        Ok(MetalsClient {
            http: MetalsHttp::new(base_url, self.timeout)?,
        })
    }
}
