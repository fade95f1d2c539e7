//! The `{status, data, message}` wrapper every backend response uses.

use crate::error::SdkError;
use serde::{Deserialize, Serialize};

/// Envelope `status` value marking a successful response.
pub const STATUS_SUCCESS: &str = "success";

/// Backend response envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, SdkError> {
        if !self.is_success() {
            return Err(SdkError::Api {
                message: self.message,
            });
        }
        self.data
            .ok_or_else(|| SdkError::Validation("envelope is missing `data`".to_string()))
    }

    /// Unwrap a successful envelope that carries only a message.
    pub fn into_message(self) -> Result<Option<String>, SdkError> {
        if !self.is_success() {
            return Err(SdkError::Api {
                message: self.message,
            });
        }
        Ok(self.message)
    }
}
