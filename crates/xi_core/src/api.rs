//! JSON response envelope for serving layers
//!
//! Mirrors the `{ success, data, error }` shape clients of the lineup API
//! already consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::SelectionError;

/// API version for schema compatibility
pub const API_VERSION: &str = "v1";

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: String,
    pub timestamp: DateTime<Utc>,
}

/// Structured API error with code and HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl From<&SelectionError> for ApiError {
    fn from(err: &SelectionError) -> Self {
        let kind = err.kind();
        Self { code: kind.code().to_string(), status: kind.status_code(), message: err.to_string() }
    }
}

impl From<serde_json::Error> for SelectionError {
    fn from(err: serde_json::Error) -> Self {
        SelectionError::Internal(format!("serialization failed: {err}"))
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(err: &SelectionError) -> Self {
        if matches!(err, SelectionError::Internal(_)) {
            error!("{err}");
        }
        Self {
            success: false,
            data: None,
            error: Some(ApiError::from(err)),
            schema_version: API_VERSION.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn from_result(result: Result<T, SelectionError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(&err),
        }
    }

    /// HTTP status matching the envelope
    pub fn status_code(&self) -> u16 {
        self.error.as_ref().map_or(200, |e| e.status)
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub fn to_json_pretty(&self) -> Result<String, SelectionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
