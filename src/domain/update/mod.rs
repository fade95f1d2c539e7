//! Backend update domain — asking the backend to re-scrape prices.

#[cfg(feature = "http")]
pub mod client;
pub mod state;

pub use state::UpdatePanel;

/// Shown when the backend confirms an update without a message.
pub const DEFAULT_UPDATED_MESSAGE: &str = "Metal prices updated";
