// ABOUTME: Unified error type and error codes for the Ironlog analytics core
// ABOUTME: Maps validation, storage, and configuration failures to structured responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Fitness Analytics

//! # Unified Error Handling
//!
//! Missing optional numeric fields are never errors in this core. The error
//! type exists for caller contract violations (`InvalidInput`), inverted date
//! ranges (`InvalidRange`), configuration failures, and failures reported
//! by the storage and cache collaborators. The surrounding service layer turns an [`AppError`] into a
//! user-facing response through [`ErrorResponse`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the core
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Malformed caller input (NaN, out-of-band ordinal, etc.)
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Date range whose start lies after its end
    #[serde(rename = "INVALID_RANGE")]
    InvalidRange = 3004,

    // Configuration (6000-6999)
    /// Configuration could not be parsed or failed validation
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Serialization or deserialization failure
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get the HTTP status code the service layer should use for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput | Self::InvalidRange => 400,

            // 500 Internal Server Error
            Self::ConfigInvalid | Self::InternalError | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidRange => "The start of the date range is after its end",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Unified error type for the core
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Structured details (offending values, field names)
    pub details: serde_json::Value,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: serde_json::Value::Null,
            source: None,
        }
    }

    /// Attach structured details
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Inverted date range, carrying the offending bounds
    #[must_use]
    pub fn invalid_range(start: NaiveDate, end: NaiveDate) -> Self {
        Self::new(
            ErrorCode::InvalidRange,
            format!("start date {start} is after end date {end}"),
        )
        .with_details(serde_json::json!({
            "start": start.to_string(),
            "end": end.to_string(),
        }))
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Error response format handed to the service layer
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an [`ErrorResponse`]
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Structured details, omitted when empty
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub details: serde_json::Value,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message,
                details: error.details,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::InvalidRange.http_status(), 400);
        assert_eq!(ErrorCode::ConfigInvalid.http_status(), 500);
        assert_eq!(ErrorCode::SerializationError.http_status(), 500);
    }

    #[test]
    fn test_invalid_range_carries_bounds() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap_or_default();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();
        let error = AppError::invalid_range(start, end);

        assert_eq!(error.code, ErrorCode::InvalidRange);
        assert_eq!(error.details["start"], "2024-06-15");
        assert_eq!(error.details["end"], "2024-06-01");
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::from(AppError::invalid_input("satisfaction must be 1..=5"));
        let json = serde_json::to_string(&response).unwrap_or_default();

        assert!(json.contains("INVALID_INPUT"));
        assert!(!json.contains("details"));
    }
}
