//! HTTP client layer — `MetalsHttp`, one method per endpoint.

pub mod client;

pub use client::MetalsHttp;
