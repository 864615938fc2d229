//! Unified error responses for the HTTP API
//!
//! Every failure renders as `{code, message, requestId?}` JSON with the
//! request id echoed in the `x-request-id` header when known.

use crate::api::constants::X_REQUEST_ID;
use crate::error::Error;
use crate::infrastructure::log_messages::requests;
use axum::{
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

/// Standard error response format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Unique error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Request ID for correlation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: None,
        }
    }

    /// Add request ID for correlation
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Convert to HTTP response with proper headers
    pub fn into_response_with_status(self, status: StatusCode) -> Response {
        let request_id = self.request_id.clone();
        let mut response = (status, Json(self)).into_response();

        if let Some(id) = request_id {
            if let Ok(header_value) = HeaderValue::from_str(&id) {
                response.headers_mut().insert(X_REQUEST_ID, header_value);
            }
        }

        response
    }
}

/// Extension trait for consistent error formatting
pub trait ErrorResponseExt {
    /// Convert to standardized error response
    fn to_error_response(&self) -> ErrorResponse;

    /// Get the appropriate HTTP status code
    fn status_code(&self) -> StatusCode;
}

impl ErrorResponseExt for Error {
    fn to_error_response(&self) -> ErrorResponse {
        match self {
            Error::InvalidInput { .. } => ErrorResponse::new("INVALID_INPUT", self.to_string()),
            Error::Config(_) => ErrorResponse::new("CONFIGURATION_ERROR", self.to_string()),
            Error::Serialization(_) => ErrorResponse::new("SERIALIZATION_ERROR", self.to_string()),
            Error::Io(_) => ErrorResponse::new("IO_ERROR", self.to_string()),
            Error::Internal(_) => ErrorResponse::new("INTERNAL_ERROR", "Internal server error"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Serialization(_) | Error::Io(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

/// Crate error tagged with the request it failed
#[derive(Debug)]
pub struct ApiError {
    pub error: Error,
    pub request_id: Option<String>,
}

impl ApiError {
    pub fn new(error: Error, headers: &HeaderMap) -> Self {
        Self {
            error,
            request_id: extract_request_id(headers),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.error.status_code();
        let request_id = self.request_id.as_deref().unwrap_or("unknown");

        if status.is_server_error() {
            error!(request_id, error = %self.error, "{}", requests::FAILED);
        } else {
            warn!(request_id, error = %self.error, "{}", requests::REJECTED);
        }

        let mut body = self.error.to_error_response();
        if let Some(id) = self.request_id {
            body = body.with_request_id(id);
        }
        body.into_response_with_status(status)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        ApiError {
            error: self,
            request_id: None,
        }
        .into_response()
    }
}

/// Helper to extract request ID from headers
pub fn extract_request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string())
}
