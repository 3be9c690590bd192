//! REST API error handling
//!
//! Service and web errors are translated into the gateway's JSON error
//! envelope: `{"error": {"code", "message", "status"}}`.
//! `ServiceError::NotFound` maps to 404, `ServiceError::Validation` to
//! 400, everything else to 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use greencity_interfaces::ServiceError;
use greencity_web::{JsonBody, WebError};
use serde_json::json;
use thiserror::Error;

/// Error type produced by REST handlers
#[derive(Debug, Error)]
pub enum RestError {
    /// Failure reported by a domain service
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// Failure in request extraction or validation
    #[error(transparent)]
    Web(#[from] WebError),
}

/// Result type for REST handlers
pub type RestResult<T> = Result<T, RestError>;

impl RestError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        RestError::Web(WebError::bad_request(message))
    }

    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            RestError::Service(ServiceError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            RestError::Service(ServiceError::Validation { .. }) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST")
            }
            RestError::Service(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
            RestError::Web(web) => (web.status_code(), web.error_code()),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let body = json!({
            "error": {
                "code": code,
                "message": self.to_string(),
                "status": status.as_u16(),
            }
        });
        (status, JsonBody(body)).into_response()
    }
}
