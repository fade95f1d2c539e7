//! # metals-client
//!
//! A Rust client for the precious-metals price API, built around a
//! view-state synchronizer. Works on native and WASM targets.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types (always available, WASM-safe)
//! 2. **HTTP API** — `MetalsHttp`, one method per endpoint
//! 3. **High-Level Client** — `MetalsClient` with nested sub-clients
//! 4. **Synchronizer** — `Synchronizer` folding request outcomes into a `ViewState`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use metals_client::prelude::*;
//!
//! let client = MetalsClient::builder()
//!     .base_url("http://localhost:5000")
//!     .build()?;
//!
//! let view = Synchronizer::new(client);
//! view.mount().await;
//!
//! let state = view.snapshot().await;
//! for quote in state.prices.quotes() {
//!     println!("{} {}", quote.symbol, display_price(quote.price));
//! }
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, the metal catalog, formatting helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Environment-driven configuration.
pub mod config;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// Low-level HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `MetalsClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 4: Synchronizer ────────────────────────────────────────────────────

/// View-state synchronizer and its state container.
pub mod sync;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::fmt::{display_date, display_price, display_timestamp};
    pub use crate::shared::{CurrencyCode, MetalInfo, MetalSymbol, RequestState, METALS};

    // Domain types
    pub use crate::domain::analysis::{MetalAnalysis, Sentiment, Trend, Volatility};
    pub use crate::domain::envelope::Envelope;
    pub use crate::domain::health::HealthStatus;
    pub use crate::domain::history::{Filter, FilterError, HistoricalPoint, HistoryQuery, LineData};
    pub use crate::domain::price::PriceQuote;

    // State slots
    pub use crate::domain::analysis::AnalysisPanel;
    pub use crate::domain::history::HistoryChart;
    pub use crate::domain::price::PriceBoard;
    pub use crate::domain::update::UpdatePanel;

    // Errors + config
    pub use crate::config::Config;
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        AnalysisClient, HealthClient, HistoryClient, MetalsClient, MetalsClientBuilder,
        PricesClient, UpdatesClient,
    };

    // Synchronizer
    pub use crate::sync::{MetalsApi, Synchronizer, ViewState};
}
