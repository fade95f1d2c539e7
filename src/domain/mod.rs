//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains some of:
//! - `mod.rs` — Rich domain types (validated, display-ready)
//! - `wire.rs` — Raw serde structs matching backend responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `state.rs` — State slots with update methods, owned by the view state
//! - `client.rs` — Sub-client with HTTP methods

pub mod analysis;
pub mod envelope;
pub mod health;
pub mod history;
pub mod price;
pub mod update;
