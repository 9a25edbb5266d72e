//! API error type
//!
//! Error bodies are a flat `{"error": "<message>"}` object; that shape is
//! part of the public contract of the catalog API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// JSON error body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: message.into(),
            },
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::InvalidId { message } => Self::bad_request(message),
            DomainError::Configuration { message } => Self::internal(message),
            DomainError::Internal { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.response.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = ApiError::not_found("LLM not found");
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.response.error, "LLM not found");
    }

    #[test]
    fn test_error_body_shape() {
        let err = ApiError::not_found("LLM not found");
        let json = serde_json::to_string(&err.response).unwrap();
        assert_eq!(json, r#"{"error":"LLM not found"}"#);
    }

    #[test]
    fn test_domain_error_conversion() {
        let domain_err = DomainError::not_found("LLM not found");
        let api_err: ApiError = domain_err.into();
        assert_eq!(api_err.status, StatusCode::NOT_FOUND);

        let domain_err = DomainError::internal("boom");
        let api_err: ApiError = domain_err.into();
        assert_eq!(api_err.status, StatusCode::INTERNAL_SERVER_ERROR);

        let domain_err = DomainError::validation("bad value");
        let api_err: ApiError = domain_err.into();
        assert_eq!(api_err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_all_error_constructors() {
        assert_eq!(ApiError::bad_request("").status, StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::not_found("").status, StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("").status,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
