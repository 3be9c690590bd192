//! Unified API error body shared by the web and REST layers

use serde::{Deserialize, Serialize};

/// Error payload serialized inside the `error` envelope of failed
/// responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{code}: {message}")]
pub struct ApiError {
    /// Stable machine-readable code, e.g. `NOT_FOUND`
    pub code: String,
    /// Human-readable description
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn not_found(entity: &str, id: impl std::fmt::Display) -> Self {
        Self::new("NOT_FOUND", format!("{} with id {} not found", entity, id))
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }

    pub fn validation_error(field: &str, message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", format!("{}: {}", field, message.into()))
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("UNAUTHORIZED", message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new("INTERNAL_ERROR", message)
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new("SERVICE_UNAVAILABLE", message)
    }

    /// HTTP status the code maps to
    pub fn http_status_code(&self) -> u16 {
        match self.code.as_str() {
            "BAD_REQUEST" | "VALIDATION_ERROR" => 400,
            "UNAUTHORIZED" => 401,
            "FORBIDDEN" => 403,
            "NOT_FOUND" => 404,
            "CONFLICT" => 409,
            "SERVICE_UNAVAILABLE" => 503,
            _ => 500,
        }
    }
}
