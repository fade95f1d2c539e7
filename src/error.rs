//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The backend answered 2xx but the envelope `status` was not `"success"`.
    #[error("API error: {}", message.as_deref().unwrap_or("no message"))]
    Api { message: Option<String> },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl SdkError {
    /// HTTP status code of a non-2xx response, if this error came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SdkError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// The `message` field of the backend envelope carried by this error.
    ///
    /// Present for non-2xx responses whose body is a JSON envelope, and for
    /// 2xx responses whose envelope reported a failure.
    pub fn api_message(&self) -> Option<String> {
        match self {
            SdkError::Api { message } => message.clone().filter(|m| !m.trim().is_empty()),
            SdkError::Http(e) => e.body().and_then(envelope_message),
            _ => None,
        }
    }

    /// Whether the response body could not be understood.
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            SdkError::Validation(_) | SdkError::Http(HttpError::Decode(_))
        )
    }
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request {status}: {body}")]
    BadRequest { status: u16, body: String },

    #[error("Malformed response body: {0}")]
    Decode(serde_json::Error),

    #[error("Timeout")]
    Timeout,
}

impl HttpError {
    pub fn status(&self) -> Option<u16> {
        match self {
            HttpError::ServerError { status, .. } | HttpError::BadRequest { status, .. } => {
                Some(*status)
            }
            HttpError::NotFound(_) => Some(404),
            _ => None,
        }
    }

    /// Raw response body of a non-2xx response.
    pub fn body(&self) -> Option<&str> {
        match self {
            HttpError::ServerError { body, .. } | HttpError::BadRequest { body, .. } => Some(body),
            HttpError::NotFound(body) => Some(body),
            _ => None,
        }
    }
}

fn envelope_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}
