//! Response types for the time-clock engine API.
//!
//! This module defines the error response structures for the HTTP API.
//! Calculation itself is total, so error bodies only arise from request
//! parsing and break-policy validation; the handlers build them directly.

use serde::{Deserialize, Serialize};

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates an unsupported break policy version error response.
    pub fn unsupported_policy_version(version: u32, supported: u32) -> Self {
        Self::with_details(
            "UNSUPPORTED_POLICY_VERSION",
            format!("Break policy version {} is not supported", version),
            format!("This engine only accepts break policy version {}", supported),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_validation_error_code() {
        let error = ApiError::validation_error("missing field `clock_out`");
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.details.is_none());
    }

    #[test]
    fn test_unsupported_policy_version_error() {
        let error = ApiError::unsupported_policy_version(99, 1);
        assert_eq!(error.code, "UNSUPPORTED_POLICY_VERSION");
        assert!(error.message.contains("99"));
        assert!(error.details.as_deref().unwrap().contains("version 1"));
    }
}
