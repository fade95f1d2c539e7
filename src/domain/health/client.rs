//! Health sub-client — backend liveness probe.

use crate::client::MetalsClient;
use crate::domain::health::HealthStatus;
use crate::error::SdkError;

/// Sub-client for the health endpoint.
pub struct Health<'a> {
    pub(crate) client: &'a MetalsClient,
}

impl<'a> Health<'a> {
    /// Probe the backend. `Ok` for any 2xx answer.
    pub async fn probe(&self) -> Result<(), SdkError> {
        Ok(self.client.http.probe_health().await?)
    }

    /// Probe and map the outcome to a display status.
    pub async fn status(&self) -> HealthStatus {
        HealthStatus::from_probe(&self.probe().await)
    }
}
