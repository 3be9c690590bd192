//! Middleware for the GreenCity HTTP gateway

pub mod auth;
pub mod cors;
pub mod request_id;

pub use auth::{auth_middleware, optional_auth_middleware, AuthConfig, JwtClaims, JwtManager};
pub use cors::{cors_layer, CorsConfig};
pub use request_id::{request_id_middleware, RequestId, REQUEST_ID_HEADER};
