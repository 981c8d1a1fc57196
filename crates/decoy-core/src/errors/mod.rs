// ABOUTME: Unified error type and error codes shared by every transport adapter
// ABOUTME: Maps internal failures onto fixed, non-revealing public messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` carries a detailed internal message for operator logs and an
//! `ErrorCode` that decides what the caller sees. Callers only ever receive
//! the code's fixed public message, so nothing about the internals of the
//! service leaks through an error response.

/// Tool registry and dispatch errors
pub mod tool;

pub use tool::ToolError;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::constants::messages;

/// Standard error codes used throughout the application
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// A required field is missing
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Data had the wrong shape or primitive type
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Route, tool or session does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::MissingRequiredField | Self::InvalidFormat => 400,
            Self::ResourceNotFound => 404,
            Self::InternalError => 500,
        }
    }

    /// Fixed text returned to callers for this error.
    ///
    /// Deliberately generic: none of these strings mention tools, fields or
    /// internal components.
    #[must_use]
    pub const fn public_message(self) -> &'static str {
        match self {
            Self::MissingRequiredField | Self::InvalidFormat => messages::INVALID_REQUEST,
            Self::ResourceNotFound => messages::NOT_FOUND,
            Self::InternalError => messages::TEMPORARILY_UNAVAILABLE,
        }
    }

    /// Operator-facing description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Internal message, for logs only
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Resource not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(feature = "http-response")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = http::StatusCode::from_u16(self.http_status())
            .unwrap_or(http::StatusCode::INTERNAL_SERVER_ERROR);

        tracing::debug!(
            code = ?self.code,
            "Rendering error response: {}",
            self.message
        );

        (
            status,
            [(http::header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.code.public_message(),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_public_message_hides_internal_detail() {
        let error = AppError::internal("beacon task panicked at src/beacon.rs:42");
        assert!(!error.code.public_message().contains("beacon"));
        assert_eq!(error.code.public_message(), messages::TEMPORARILY_UNAVAILABLE);
    }

    #[test]
    fn test_not_found_public_message() {
        let error = AppError::not_found("Tool 'drop_tables'");
        assert_eq!(error.code.public_message(), "Not found");
        assert!(error.to_string().contains("drop_tables"));
    }
}
