//! # GreenCity Web Utilities
//!
//! Reusable middleware and extractors for the GreenCity HTTP gateway:
//! JWT principal handling, validated pagination and locale extraction,
//! multi-value query parsing, request-id propagation, CORS, and JSON
//! response helpers that pin the content type the frontend expects.

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod utils;

// Re-export commonly used types and functions
pub use errors::{WebError, WebResult};
pub use extractors::{Locale, MultiQuery, PageableParams, PageableQuery, Principal};
pub use middleware::{
    auth_middleware, cors_layer, optional_auth_middleware, request_id_middleware, AuthConfig,
    JwtClaims, JwtManager, RequestId, REQUEST_ID_HEADER,
};
pub use utils::{created, ok, JsonBody, JSON_CONTENT_TYPE};
