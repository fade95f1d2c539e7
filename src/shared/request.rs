//! Per-request display state.

/// Where a logical request currently stands, as the view should present it.
///
/// Derived from a state slot on demand; never stored or persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// Nothing requested yet.
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> RequestState<T> {
    /// Derive the state from the usual slot fields.
    ///
    /// Loading takes precedence over a stale error, and an error over data
    /// kept from a previous success.
    pub fn derive(loading: bool, error: Option<&str>, data: Option<T>) -> Self {
        if loading {
            return RequestState::Loading;
        }
        if let Some(message) = error {
            return RequestState::Failed(message.to_string());
        }
        match data {
            Some(d) => RequestState::Success(d),
            None => RequestState::Idle,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(d) => Some(d),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_idle() {
        let state: RequestState<u8> = RequestState::derive(false, None, None);
        assert_eq!(state, RequestState::Idle);
    }

    #[test]
    fn test_derive_loading_wins() {
        let state = RequestState::derive(true, Some("old"), Some(1));
        assert!(state.is_loading());
    }

    #[test]
    fn test_derive_error_over_stale_data() {
        let state = RequestState::derive(false, Some("boom"), Some(1));
        assert_eq!(state.error(), Some("boom"));
        assert!(state.data().is_none());
    }

    #[test]
    fn test_derive_success() {
        let state = RequestState::derive(false, None, Some(7));
        assert_eq!(state.data(), Some(&7));
    }
}
