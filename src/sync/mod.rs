//! View-state synchronizer — keeps a `ViewState` in step with the backend.
//!
//! Every operation issues one request, waits for it, and folds the outcome
//! into the state: data on success, a display string on failure. Nothing is
//! returned to the caller and nothing panics; the view re-renders from
//! [`Synchronizer::snapshot`].
//!
//! Each logical operation carries a generation counter. Issuing a request
//! bumps it, and a completion only applies if no newer request of the same
//! kind was issued meanwhile, so the last issued request wins.

pub mod api;
pub mod messages;
pub mod state;

pub use api::MetalsApi;
pub use messages::Subject;
pub use state::ViewState;

use crate::domain::health::HealthStatus;
use crate::domain::history::Filter;
use crate::shared::{CurrencyCode, MetalSymbol};
use messages::{describe_failure, FILTER_INCOMPLETE, NO_HISTORY_DATA};

use async_lock::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Logical operations with independent request generations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Prices,
    History,
    Health,
    Update,
    Analysis,
}

#[derive(Debug, Default)]
struct Generations {
    prices: AtomicU64,
    history: AtomicU64,
    health: AtomicU64,
    update: AtomicU64,
    analysis: AtomicU64,
}

impl Generations {
    fn counter(&self, op: Operation) -> &AtomicU64 {
        match op {
            Operation::Prices => &self.prices,
            Operation::History => &self.history,
            Operation::Health => &self.health,
            Operation::Update => &self.update,
            Operation::Analysis => &self.analysis,
        }
    }

    fn issue(&self, op: Operation) -> u64 {
        self.counter(op).fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_current(&self, op: Operation, generation: u64) -> bool {
        self.counter(op).load(Ordering::SeqCst) == generation
    }

    fn invalidate_all(&self) {
        for op in [
            Operation::Prices,
            Operation::History,
            Operation::Health,
            Operation::Update,
            Operation::Analysis,
        ] {
            self.issue(op);
        }
    }
}

/// Owns the view state and the API handle; cheap to clone into handlers.
pub struct Synchronizer<A> {
    api: Arc<A>,
    state: Arc<RwLock<ViewState>>,
    generations: Arc<Generations>,
}

impl<A> Clone for Synchronizer<A> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: self.state.clone(),
            generations: self.generations.clone(),
        }
    }
}

impl<A: MetalsApi> Synchronizer<A> {
    pub fn new(api: A) -> Self {
        Self::with_filter(api, Filter::default())
    }

    /// Start with a pre-selected filter (e.g. a date range from the command line).
    pub fn with_filter(api: A, filter: Filter) -> Self {
        Self {
            api: Arc::new(api),
            state: Arc::new(RwLock::new(ViewState::new(filter))),
            generations: Arc::new(Generations::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// A copy of the current state for rendering.
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    pub async fn filter(&self) -> Filter {
        self.state.read().await.filter.clone()
    }

    /// Apply user input to the filter. Does not issue a request.
    pub async fn update_filter(&self, edit: impl FnOnce(&mut Filter)) {
        edit(&mut self.state.write().await.filter);
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Initial load: health probe and current prices, concurrently.
    pub async fn mount(&self) {
        let currency = self.filter().await.currency;
        tracing::info!(currency = %currency, "mounting view");
        futures_util::future::join(
            self.check_backend_health(),
            self.refresh_current_prices(currency),
        )
        .await;
    }

    /// Drop every in-flight request and reset the state, keeping the filter.
    pub async fn unmount(&self) {
        self.generations.invalidate_all();
        let mut state = self.state.write().await;
        let filter = state.filter.clone();
        *state = ViewState::new(filter);
        tracing::info!("view unmounted");
    }

    // ── Current prices ───────────────────────────────────────────────────

    /// Refresh the price table in `currency`.
    ///
    /// On failure the previous quotes stay and the error slot is set.
    pub async fn refresh_current_prices(&self, currency: CurrencyCode) {
        let generation = self.generations.issue(Operation::Prices);
        {
            let mut state = self.state.write().await;
            state.filter.currency = currency.clone();
            state.prices.begin();
        }

        let result = self.api.current_prices(&currency).await;

        let mut state = self.state.write().await;
        if self.is_stale(Operation::Prices, generation) {
            return;
        }
        match result {
            Ok(quotes) => {
                tracing::info!(count = quotes.len(), currency = %currency, "prices refreshed");
                state.prices.apply_quotes(currency, quotes);
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch metal prices");
                state.prices.apply_error(describe_failure(&e, Subject::Prices));
            }
        }
    }

    // ── History ──────────────────────────────────────────────────────────

    /// Store `filter` and load the history it describes.
    ///
    /// An incomplete filter is rejected without a request.
    pub async fn load_history(&self, filter: Filter) {
        let generation = self.generations.issue(Operation::History);
        let query = {
            let mut state = self.state.write().await;
            state.filter = filter;
            match state.filter.history_query() {
                Ok(query) => {
                    state.history.begin(query.clone());
                    query
                }
                Err(e) => {
                    tracing::debug!(reason = %e, "history query rejected");
                    state.history.reject(FILTER_INCOMPLETE.to_string());
                    return;
                }
            }
        };

        let result = self.api.history(&query).await;

        let mut state = self.state.write().await;
        if self.is_stale(Operation::History, generation) {
            return;
        }
        match result {
            Ok(points) => {
                tracing::info!(metal = %query.metal, count = points.len(), "history loaded");
                state.history.apply_points(points, NO_HISTORY_DATA);
            }
            Err(e) => {
                tracing::warn!(error = %e, metal = %query.metal, "failed to fetch metal history");
                state.history.apply_error(describe_failure(&e, Subject::History));
            }
        }
    }

    /// Load history for whatever the filter currently holds.
    pub async fn load_history_for_current_filter(&self) {
        let filter = self.filter().await;
        self.load_history(filter).await;
    }

    // ── Health ───────────────────────────────────────────────────────────

    pub async fn check_backend_health(&self) {
        let generation = self.generations.issue(Operation::Health);
        let result = self.api.probe_health().await;
        if let Err(e) = &result {
            tracing::warn!(error = %e, "backend health probe failed");
        }
        let status = HealthStatus::from_probe(&result);

        let mut state = self.state.write().await;
        if self.is_stale(Operation::Health, generation) {
            return;
        }
        state.health = Some(status);
    }

    // ── Backend update ───────────────────────────────────────────────────

    /// Ask the backend to refresh prices, then reload the price table.
    pub async fn trigger_backend_update(&self) {
        let generation = self.generations.issue(Operation::Update);
        self.state.write().await.update.begin();

        let result = self.api.trigger_update().await;

        let currency = {
            let mut state = self.state.write().await;
            if self.is_stale(Operation::Update, generation) {
                return;
            }
            match result {
                Ok(message) => {
                    tracing::info!(%message, "backend update completed");
                    state.update.apply_success(message);
                    state.filter.currency.clone()
                }
                Err(e) => {
                    tracing::warn!(error = %e, "backend update failed");
                    state.update.apply_error(describe_failure(&e, Subject::Update));
                    return;
                }
            }
        };

        self.refresh_current_prices(currency).await;
    }

    // ── Analysis ─────────────────────────────────────────────────────────

    pub async fn load_analysis(&self, metal: MetalSymbol) {
        let generation = self.generations.issue(Operation::Analysis);
        self.state.write().await.analysis.begin(metal.clone());

        let result = self.api.analysis(&metal).await;

        let mut state = self.state.write().await;
        if self.is_stale(Operation::Analysis, generation) {
            return;
        }
        match result {
            Ok(analysis) => state.analysis.apply_analysis(analysis),
            Err(e) => {
                tracing::warn!(error = %e, metal = %metal, "failed to fetch metal analysis");
                state.analysis.apply_error(describe_failure(&e, Subject::Analysis));
            }
        }
    }

    fn is_stale(&self, op: Operation, generation: u64) -> bool {
        let stale = !self.generations.is_current(op, generation);
        if stale {
            tracing::debug!(?op, generation, "discarding stale response");
        }
        stale
    }
}
