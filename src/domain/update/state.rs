//! Update state slot.

use crate::shared::RequestState;
use chrono::{DateTime, Utc};

/// Status of the last "refresh prices on the backend" request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdatePanel {
    updating: bool,
    message: Option<String>,
    error: Option<String>,
    completed_at: Option<DateTime<Utc>>,
}

impl UpdatePanel {
    pub fn begin(&mut self) {
        self.updating = true;
        self.error = None;
    }

    pub fn apply_success(&mut self, message: String) {
        self.message = Some(message);
        self.completed_at = Some(Utc::now());
        self.error = None;
        self.updating = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.error = Some(message);
        self.updating = false;
    }

    pub fn is_updating(&self) -> bool {
        self.updating
    }

    /// Confirmation from the last successful update.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn request_state(&self) -> RequestState<&str> {
        let data = self.completed_at.and(self.message.as_deref());
        RequestState::derive(self.updating, self.error.as_deref(), data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_lifecycle() {
        let mut panel = UpdatePanel::default();
        assert_eq!(panel.request_state(), RequestState::Idle);

        panel.begin();
        assert!(panel.is_updating());

        panel.apply_success("done".to_string());
        assert!(!panel.is_updating());
        assert_eq!(panel.request_state(), RequestState::Success("done"));

        panel.begin();
        panel.apply_error("failed".to_string());
        assert_eq!(panel.error(), Some("failed"));
        assert_eq!(panel.message(), Some("done"));
    }
}
