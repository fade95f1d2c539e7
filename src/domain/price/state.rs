//! Price state slot — owned by the view state, updated by the synchronizer.

use super::PriceQuote;
use crate::shared::{CurrencyCode, MetalSymbol, RequestState};
use chrono::{DateTime, Utc};

/// The current-prices table: the last good quote list plus request status.
///
/// A failed refresh keeps the previous quotes so the view can keep showing
/// them next to the error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBoard {
    quotes: Vec<PriceQuote>,
    currency: Option<CurrencyCode>,
    updated_at: Option<DateTime<Utc>>,
    loading: bool,
    error: Option<String>,
}

impl PriceBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a refresh as started.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Replace all quotes with a fresh list.
    pub fn apply_quotes(&mut self, currency: CurrencyCode, quotes: Vec<PriceQuote>) {
        self.quotes = quotes;
        self.currency = Some(currency);
        self.updated_at = Some(Utc::now());
        self.error = None;
        self.loading = false;
    }

    /// Record a failed refresh. Existing quotes are left as they were.
    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    pub fn quotes(&self) -> &[PriceQuote] {
        &self.quotes
    }

    pub fn get(&self, symbol: &MetalSymbol) -> Option<&PriceQuote> {
        self.quotes.iter().find(|q| &q.symbol == symbol)
    }

    /// Currency the displayed quotes are in.
    pub fn currency(&self) -> Option<&CurrencyCode> {
        self.currency.as_ref()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn request_state(&self) -> RequestState<&[PriceQuote]> {
        let data = self.updated_at.map(|_| self.quotes.as_slice());
        RequestState::derive(self.loading, self.error.as_deref(), data)
    }
}
