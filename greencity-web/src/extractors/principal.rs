//! Authenticated principal extractor
//!
//! The auth middleware validates the bearer token and stores a
//! [`Principal`] in request extensions; handlers pick it up through
//! this extractor. Requiring `Principal` in a handler signature makes
//! the endpoint authenticated, `Option<Principal>` makes auth optional.

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::request::Parts,
};

use crate::errors::WebError;

/// Identity of the authenticated caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Email address carried in the token subject
    pub email: String,
}

impl Principal {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .ok_or_else(|| WebError::unauthorized("Authentication required"))
    }
}

impl<S> OptionalFromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<Principal>().cloned())
    }
}
