//! Network URL constants for the metals API.

/// Default REST API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Default request timeout, in seconds (native targets only).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
