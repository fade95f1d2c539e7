//! The seam between the synchronizer and the backend.

use crate::domain::analysis::MetalAnalysis;
use crate::domain::history::{HistoricalPoint, HistoryQuery};
use crate::domain::price::PriceQuote;
use crate::error::SdkError;
use crate::shared::{CurrencyCode, MetalSymbol};
use async_trait::async_trait;

/// Backend operations the synchronizer depends on.
///
/// `MetalsClient` is the HTTP implementation; tests and alternative front
/// ends can provide their own.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MetalsApi: Send + Sync {
    async fn current_prices(&self, currency: &CurrencyCode) -> Result<Vec<PriceQuote>, SdkError>;

    async fn history(&self, query: &HistoryQuery) -> Result<Vec<HistoricalPoint>, SdkError>;

    /// `Ok` when the backend answered the probe with a 2xx status.
    async fn probe_health(&self) -> Result<(), SdkError>;

    /// Ask the backend to refresh its prices; returns its confirmation.
    async fn trigger_update(&self) -> Result<String, SdkError>;

    async fn analysis(&self, metal: &MetalSymbol) -> Result<MetalAnalysis, SdkError>;
}
