//! Updates sub-client — trigger a backend price refresh.

use crate::client::MetalsClient;
use crate::domain::update::DEFAULT_UPDATED_MESSAGE;
use crate::error::SdkError;

/// Sub-client for the backend update endpoint.
pub struct Updates<'a> {
    pub(crate) client: &'a MetalsClient,
}

impl<'a> Updates<'a> {
    /// Trigger a refresh; returns the backend's confirmation message.
    pub async fn trigger(&self) -> Result<String, SdkError> {
        let envelope = self.client.http.post_update().await?;
        Ok(envelope
            .into_message()?
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_UPDATED_MESSAGE.to_string()))
    }
}
