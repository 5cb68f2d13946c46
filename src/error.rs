//! Boundary error responses.
//!
//! Gateway errors carry their own HTTP status mapping; this module renders
//! them as the standardized JSON error shape so handlers can bubble with
//! `?` and let axum do the rest.

use crate::gateway::error::GatewayError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Standardized error response structure returned to clients for all
/// failure cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// ISO 8601 timestamp of the error
    pub timestamp: String,

    /// Whether the client should retry the request
    pub retryable: bool,
}

impl ErrorResponse {
    pub fn from_gateway_error(error: &GatewayError) -> Self {
        Self {
            error: error.error_code().to_string(),
            message: error.user_message(),
            timestamp: Utc::now().to_rfc3339(),
            retryable: error.is_retryable(),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse::from_gateway_error(&self);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_rejection_renders_as_402_with_stable_code() {
        let response = GatewayError::GatewayRejected {
            message: "declined".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::PAYMENT_REQUIRED);
    }

    #[test]
    fn transient_errors_render_as_503() {
        let response = GatewayError::ConnectionError {
            message: "timeout".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn error_response_carries_retryable_flag() {
        let body = ErrorResponse::from_gateway_error(&GatewayError::ServerError {
            status_code: 500,
            message: "oops".to_string(),
        });
        assert_eq!(body.error, "SERVER_ERROR");
        assert!(body.retryable);
    }
}
