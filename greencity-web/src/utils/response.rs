//! JSON response helpers
//!
//! The frontend contract pins the content type to
//! `application/json;charset=UTF-8`, so responses are built here rather
//! than with `axum::Json` (which emits plain `application/json`).

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type of every JSON response the gateway produces
pub const JSON_CONTENT_TYPE: &str = "application/json;charset=UTF-8";

/// JSON responder carrying the gateway's content type
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T: Serialize> IntoResponse for JsonBody<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(bytes) => Response::builder()
                .status(StatusCode::OK)
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(Body::from(bytes))
                // Infallible: status and header are statically valid
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response()),
            Err(err) => {
                tracing::error!("Failed to serialize response body: {}", err);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

/// 200 response with a JSON body
pub fn ok<T: Serialize>(data: T) -> impl IntoResponse {
    JsonBody(data)
}

/// 201 response with a JSON body
pub fn created<T: Serialize>(data: T) -> impl IntoResponse {
    (StatusCode::CREATED, JsonBody(data))
}
