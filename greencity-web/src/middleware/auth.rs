//! JWT authentication middleware
//!
//! Tokens are HS256-signed bearer tokens whose subject is the user's
//! email address. On success the middleware stores a
//! [`Principal`](crate::extractors::Principal) in request extensions;
//! the principal extractor turns its absence into a 401.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::WebError;
use crate::extractors::Principal;

/// Claims carried by a gateway access token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JwtClaims {
    /// Subject (user email)
    pub sub: String,
    /// Issued at
    pub iat: i64,
    /// Expiration time
    pub exp: i64,
    /// Issuer
    pub iss: String,
    /// Audience
    pub aud: String,
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// JWT secret for signing/verification
    pub jwt_secret: String,
    /// JWT issuer
    pub jwt_issuer: String,
    /// JWT audience
    pub jwt_audience: String,
    /// Token expiration duration (in hours)
    pub token_expiry_hours: i64,
    /// Whether to require authentication on protected routes
    pub require_auth: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me".to_string(),
            jwt_issuer: "greencity-gateway".to_string(),
            jwt_audience: "greencity-clients".to_string(),
            token_expiry_hours: 24,
            require_auth: false, // disabled by default for development
        }
    }
}

/// JWT token manager
pub struct JwtManager {
    config: AuthConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtManager {
    pub fn new(config: AuthConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generate an access token for a user email
    pub fn generate_token(&self, email: &str) -> Result<String, WebError> {
        let now = Utc::now();
        let exp = now + Duration::hours(self.config.token_expiry_hours);

        let claims = JwtClaims {
            sub: email.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
            iss: self.config.jwt_issuer.clone(),
            aud: self.config.jwt_audience.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| WebError::internal(format!("Failed to generate JWT token: {}", e)))
    }

    /// Verify and decode an access token
    pub fn verify_token(&self, token: &str) -> Result<JwtClaims, WebError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.config.jwt_issuer]);
        validation.set_audience(&[&self.config.jwt_audience]);

        let token_data = decode::<JwtClaims>(token, &self.decoding_key, &validation).map_err(|e| {
            warn!("JWT verification failed: {}", e);
            WebError::unauthorized("Invalid or expired token")
        })?;

        Ok(token_data.claims)
    }

    fn extract_token(&self, headers: &HeaderMap) -> Option<String> {
        let auth_header = headers.get("Authorization")?.to_str().ok()?;
        auth_header.strip_prefix("Bearer ").map(str::to_string)
    }

    /// Resolve the calling principal from request headers
    pub fn principal_from_headers(&self, headers: &HeaderMap) -> Result<Principal, WebError> {
        let token = self
            .extract_token(headers)
            .ok_or_else(|| WebError::unauthorized("Authentication required"))?;

        let claims = self.verify_token(&token)?;
        debug!("Authenticated principal: {}", claims.sub);

        Ok(Principal::new(claims.sub))
    }
}

/// Authentication middleware for protected routes
///
/// Rejects the request with 401 unless a valid bearer token is present.
pub async fn auth_middleware(
    State(jwt_manager): State<Arc<JwtManager>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, WebError> {
    let principal = jwt_manager.principal_from_headers(&headers)?;
    request.extensions_mut().insert(principal);

    Ok(next.run(request).await)
}

/// Optional authentication middleware
///
/// Stores a principal when a valid token is present, and lets the
/// request through anonymously otherwise.
pub async fn optional_auth_middleware(
    State(jwt_manager): State<Arc<JwtManager>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Response {
    if let Ok(principal) = jwt_manager.principal_from_headers(&headers) {
        request.extensions_mut().insert(principal);
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn manager() -> JwtManager {
        JwtManager::new(AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        })
    }

    #[test]
    fn token_round_trip_carries_the_email() {
        let manager = manager();
        let token = manager.generate_token("user@example.com").unwrap();
        let claims = manager.verify_token(&token).unwrap();

        assert_eq!(claims.sub, "user@example.com");
        assert_eq!(claims.iss, "greencity-gateway");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn tampered_token_is_rejected() {
        let manager = manager();
        let other = JwtManager::new(AuthConfig {
            jwt_secret: "other-secret".to_string(),
            ..AuthConfig::default()
        });

        let token = other.generate_token("user@example.com").unwrap();
        assert!(manager.verify_token(&token).is_err());
    }

    #[test]
    fn principal_comes_from_the_bearer_header() {
        let manager = manager();
        let token = manager.generate_token("user@example.com").unwrap();

        let mut headers = HeaderMap::new();
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
        );

        let principal = manager.principal_from_headers(&headers).unwrap();
        assert_eq!(principal.email, "user@example.com");
    }

    #[test]
    fn missing_header_is_unauthorized() {
        let manager = manager();
        let result = manager.principal_from_headers(&HeaderMap::new());
        assert!(matches!(result, Err(WebError::Unauthorized { .. })));
    }
}
