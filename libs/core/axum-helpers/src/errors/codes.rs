//! Type-safe error codes for API responses.
//!
//! Each error code carries:
//! - String representation for client consumption (e.g., "VALIDATION_ERROR")
//! - Integer code for logging and monitoring (e.g., 1001)
//! - Default human-readable message
//!
//! # Example
//!
//! ```rust
//! use axum_helpers::errors::ErrorCode;
//!
//! let code = ErrorCode::ValidationError;
//! assert_eq!(code.as_str(), "VALIDATION_ERROR");
//! assert_eq!(code.code(), 1001);
//! assert_eq!(code.default_message(), "Request validation failed");
//! ```

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standardized error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Client errors
    /// Request validation failed
    ValidationError,

    /// Path identifier is not a valid integer
    InvalidId,

    /// JSON extraction from request body failed
    JsonExtraction,

    /// Requested resource was not found
    NotFound,

    /// Request conflicts with current resource state (e.g., duplicate email)
    Conflict,

    /// Request payload is semantically incorrect
    UnprocessableEntity,

    /// Query string could not be parsed
    InvalidQuery,

    /// Generic malformed request
    BadRequest,

    // Server errors
    /// An unexpected internal server error occurred
    InternalError,

    /// A dependency (database) is not available
    ServiceUnavailable,
}

impl ErrorCode {
    /// Returns the string identifier sent to clients.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidId => "INVALID_ID",
            ErrorCode::JsonExtraction => "JSON_EXTRACTION",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            ErrorCode::InvalidQuery => "INVALID_QUERY",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Returns the integer code used in logs.
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::ValidationError => 1001,
            ErrorCode::InvalidId => 1002,
            ErrorCode::JsonExtraction => 1003,
            ErrorCode::NotFound => 1004,
            ErrorCode::InternalError => 1005,
            ErrorCode::Conflict => 1008,
            ErrorCode::UnprocessableEntity => 1009,
            ErrorCode::ServiceUnavailable => 1011,
            ErrorCode::InvalidQuery => 1012,
            ErrorCode::BadRequest => 1013,
        }
    }

    pub fn default_message(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "Request validation failed",
            ErrorCode::InvalidId => "Invalid id format",
            ErrorCode::JsonExtraction => "Failed to parse JSON request body",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::Conflict => "Resource already exists",
            ErrorCode::UnprocessableEntity => "Unprocessable entity",
            ErrorCode::InvalidQuery => "Invalid query parameters",
            ErrorCode::BadRequest => "Bad request",
            ErrorCode::InternalError => "An internal server error occurred",
            ErrorCode::ServiceUnavailable => "Service temporarily unavailable",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_string_representation() {
        assert_eq!(ErrorCode::ValidationError.as_str(), "VALIDATION_ERROR");
        assert_eq!(ErrorCode::InvalidId.as_str(), "INVALID_ID");
        assert_eq!(ErrorCode::Conflict.as_str(), "CONFLICT");
        assert_eq!(ErrorCode::InternalError.as_str(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_error_code_integer_codes_are_unique() {
        let all = [
            ErrorCode::ValidationError,
            ErrorCode::InvalidId,
            ErrorCode::JsonExtraction,
            ErrorCode::NotFound,
            ErrorCode::Conflict,
            ErrorCode::UnprocessableEntity,
            ErrorCode::InvalidQuery,
            ErrorCode::BadRequest,
            ErrorCode::InternalError,
            ErrorCode::ServiceUnavailable,
        ];
        let mut codes: Vec<i32> = all.iter().map(ErrorCode::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    }

    #[test]
    fn test_error_code_serialization_matches_as_str() {
        let json = serde_json::to_string(&ErrorCode::JsonExtraction).unwrap();
        assert_eq!(json, "\"JSON_EXTRACTION\"");

        let code: ErrorCode = serde_json::from_str("\"SERVICE_UNAVAILABLE\"").unwrap();
        assert_eq!(code, ErrorCode::ServiceUnavailable);
    }
}
