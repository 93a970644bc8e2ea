//! API layer error types
//!
//! Error codes:
//! - VK_UNKNOWN_METHOD
//! - VK_INVALID_REQUEST
//! - VK_MAPPING_FAILED
//! - VK_MISSING_FIELD

use std::fmt;

/// API-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCode {
    /// Method name not recognized
    UnknownMethod,
    /// Request could not be constructed
    InvalidRequest,
    /// Response could not be mapped to domain models
    MappingFailed,
    /// Expected field absent from a response
    MissingField,
}

impl ApiErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            ApiErrorCode::UnknownMethod => "VK_UNKNOWN_METHOD",
            ApiErrorCode::InvalidRequest => "VK_INVALID_REQUEST",
            ApiErrorCode::MappingFailed => "VK_MAPPING_FAILED",
            ApiErrorCode::MissingField => "VK_MISSING_FIELD",
        }
    }
}

impl fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// API error
#[derive(Debug)]
pub struct ApiError {
    code: ApiErrorCode,
    message: String,
}

impl ApiError {
    /// Create an unknown method error
    pub fn unknown_method(name: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::UnknownMethod,
            message: format!("unknown API method: {}", name.into()),
        }
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::InvalidRequest,
            message: reason.into(),
        }
    }

    /// Create a mapping error
    pub fn mapping_failed(reason: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::MappingFailed,
            message: reason.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self {
            code: ApiErrorCode::MissingField,
            message: format!("expected field absent: {}", path.into()),
        }
    }

    /// Returns the error code
    pub fn code(&self) -> ApiErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
