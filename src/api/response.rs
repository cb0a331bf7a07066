//! Response types for the check-in API.
//!
//! This module defines the success payloads plus the error response
//! structures and error handling for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;
use crate::models::{AttendeeRecord, ClassificationResult};
use crate::render::BadgeImageSpec;

/// Response body for the `/scan` endpoint.
///
/// Denials (attendee not found, event not active) are successful responses
/// with `authorized == false`; wristband guidance and the badge are present
/// only on authorized scans, and guidance additionally only when the event
/// shows the wristband panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResponse {
    /// Correlation id for this scan.
    pub scan_id: Uuid,
    /// When the scan was processed.
    pub timestamp: DateTime<Utc>,
    /// The attendee id that was scanned.
    pub attendee_id: String,
    /// Whether check-in was authorized.
    pub authorized: bool,
    /// Human-readable outcome reason.
    pub reason: String,
    /// The normalized attendee record, when found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attendee: Option<AttendeeRecord>,
    /// The resolved event display name, on authorized scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_name: Option<String>,
    /// Wristband/backpack guidance, when the panel is visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidance: Option<ClassificationResult>,
    /// The rendered badge, on authorized scans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<BadgeImageSpec>,
}

/// Response body for the `/classify` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    /// The rule-chain outcome.
    pub classification: ClassificationResult,
    /// Whether the wristband panel is shown for the event.
    pub panel_visible: bool,
    /// The pirata flag after normalization.
    pub pirata_normalized: bool,
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

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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
            EngineError::RosterNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster error",
                    format!("Roster file not found: {}", path),
                ),
            },
            EngineError::RosterParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "ROSTER_ERROR",
                    "Roster parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::LogWriteError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "LOG_ERROR",
                    "Access log write failed",
                    format!("Failed to write {}: {}", path, message),
                ),
            },
        }
    }
}
