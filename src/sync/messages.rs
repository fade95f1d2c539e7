//! Display strings for recovered failures.

use crate::error::SdkError;

/// Shown when `load_history` is called with an incomplete filter.
pub const FILTER_INCOMPLETE: &str = "Please select a metal and both dates to show the history.";

/// Shown when a history query succeeds with no rows.
pub const NO_HISTORY_DATA: &str = "No data for the selected period.";

/// Which request failed, for wording the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    Prices,
    History,
    Update,
    Analysis,
}

impl Subject {
    fn noun(&self) -> &'static str {
        match self {
            Subject::Prices => "current prices",
            Subject::History => "price history",
            Subject::Update => "the price update",
            Subject::Analysis => "the analysis",
        }
    }

    /// Message used when nothing more specific is known.
    pub fn generic_fallback(&self) -> String {
        format!("An unknown error occurred while loading {}.", self.noun())
    }
}

/// Turn any failure into the string the view shows.
///
/// The backend's own envelope message wins; otherwise the status code, then
/// the kind of failure, then the generic fallback.
pub fn describe_failure(err: &SdkError, subject: Subject) -> String {
    if let Some(message) = err.api_message() {
        return message;
    }
    if let Some(status) = err.status() {
        return format!("Error {} while loading {}", status, subject.noun());
    }
    if let SdkError::Api { .. } = err {
        return format!("Could not fetch {}", subject.noun());
    }
    if err.is_malformed() {
        return format!("Received a malformed response while loading {}", subject.noun());
    }
    subject.generic_fallback()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;

    #[test]
    fn test_envelope_message_used_verbatim() {
        let err = SdkError::Http(HttpError::ServerError {
            status: 500,
            body: r#"{"status": "error", "message": "X"}"#.to_string(),
        });
        assert_eq!(describe_failure(&err, Subject::Prices), "X");
    }

    #[test]
    fn test_status_without_message() {
        let err = SdkError::Http(HttpError::BadRequest {
            status: 400,
            body: "nope".to_string(),
        });
        assert_eq!(
            describe_failure(&err, Subject::History),
            "Error 400 while loading price history"
        );
    }

    #[test]
    fn test_unsuccessful_envelope_without_message() {
        let err = SdkError::Api { message: None };
        assert_eq!(
            describe_failure(&err, Subject::Prices),
            "Could not fetch current prices"
        );
    }

    #[test]
    fn test_malformed_body() {
        let err = SdkError::Validation("quote has no symbol".to_string());
        assert_eq!(
            describe_failure(&err, Subject::Prices),
            "Received a malformed response while loading current prices"
        );
    }

    #[test]
    fn test_transport_failure_uses_generic_fallback() {
        let err = SdkError::Http(HttpError::Timeout);
        assert_eq!(
            describe_failure(&err, Subject::Prices),
            Subject::Prices.generic_fallback()
        );
        assert_eq!(
            Subject::Prices.generic_fallback(),
            "An unknown error occurred while loading current prices."
        );
    }
}
