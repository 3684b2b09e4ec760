//! Response types for the scheduling engine API.
//!
//! This module defines the success envelopes, the error response
//! structures, and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{CoverageShortfall, Shift, Violation};
use crate::scheduler::ScheduleScore;

/// Response body for `POST /evaluate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationResponse {
    /// Correlation id for this evaluation.
    pub evaluation_id: Uuid,
    /// The ordered violations, hard and soft.
    pub violations: Vec<Violation>,
    /// Whether any violation blocks the assignment.
    pub blocking: bool,
}

/// Response body for `POST /schedule`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleResponse {
    /// Identifier of the proposed plan.
    pub plan_id: Uuid,
    /// When the plan was produced.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the plan.
    pub engine_version: String,
    /// The final working set: pre-existing shifts plus new assignments.
    pub shifts: Vec<Shift>,
    /// Residual coverage deficits.
    pub unmet: Vec<CoverageShortfall>,
    /// Every violation accumulated during the run.
    pub violations: Vec<Violation>,
    /// Aggregate plan quality.
    pub score: ScheduleScore,
}

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

    /// Creates a profile not found error response.
    pub fn profile_not_found(name: &str) -> Self {
        Self::with_details(
            "PROFILE_NOT_FOUND",
            format!("Labor law profile not found: {}", name),
            format!("The profile '{}' is not loaded in this engine", name),
        )
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::ProfileNotFound { name } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::profile_not_found(&name),
            },
            EngineError::BlockedApply { count, .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "BLOCKED_APPLY",
                    "Plan apply refused",
                    format!("{} hard violation(s) outstanding", count),
                ),
            },
        }
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
    fn test_profile_not_found_error() {
        let error = ApiError::profile_not_found("night_shift");
        assert_eq!(error.code, "PROFILE_NOT_FOUND");
        assert!(error.message.contains("night_shift"));
    }

    #[test]
    fn test_engine_error_to_api_error() {
        let engine_error = EngineError::ProfileNotFound {
            name: "invalid".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "PROFILE_NOT_FOUND");
    }

    #[test]
    fn test_blocked_apply_maps_to_conflict() {
        let engine_error = EngineError::BlockedApply {
            count: 3,
            violations: vec![],
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::CONFLICT);
        assert_eq!(api_error.error.code, "BLOCKED_APPLY");
    }
}
