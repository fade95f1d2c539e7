//! Backend health domain — liveness probe status.

#[cfg(feature = "http")]
pub mod client;

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

pub const HEALTHY_MESSAGE: &str = "API is running";
pub const UNREACHABLE_MESSAGE: &str = "API is unreachable";

/// Backend status as shown in the page header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy { message: String },
    Unhealthy { message: String },
}

impl HealthStatus {
    /// Map a probe outcome: 2xx is healthy, a non-2xx status or any
    /// transport failure is not.
    pub fn from_probe(result: &Result<(), SdkError>) -> Self {
        match result {
            Ok(()) => HealthStatus::Healthy {
                message: HEALTHY_MESSAGE.to_string(),
            },
            Err(e) => match e.status() {
                Some(status) => HealthStatus::Unhealthy {
                    message: format!("API returned status: {}", status),
                },
                None => HealthStatus::Unhealthy {
                    message: UNREACHABLE_MESSAGE.to_string(),
                },
            },
        }
    }

    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Healthy { .. } => "healthy",
            HealthStatus::Unhealthy { .. } => "unhealthy",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            HealthStatus::Healthy { message } | HealthStatus::Unhealthy { message } => message,
        }
    }
}
