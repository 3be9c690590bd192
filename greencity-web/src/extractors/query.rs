//! Query parameter extractors
//!
//! Spring-style pagination (`page`/`size`, zero-based) and locale
//! parameters, plus a multi-value query map for filter parameters that
//! may be repeated (`tags=a&tags=b`) or comma-joined (`tags=a,b`).

use std::collections::HashMap;
use std::str::FromStr;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use greencity_api_types::{pagination::MAX_PAGE_SIZE, PageRequest};
use serde::{Deserialize, Serialize};

use crate::errors::WebError;

/// Pagination query parameters, zero-based
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageableQuery {
    /// Page index (0-based)
    pub page: Option<u32>,
    /// Items per page (max 100)
    pub size: Option<u32>,
}

impl PageableQuery {
    /// Convert to a page request, applying the gateway defaults
    pub fn to_page_request(&self) -> PageRequest {
        PageRequest::of(
            self.page.unwrap_or(0),
            self.size.unwrap_or(PageRequest::default().size),
        )
    }

    /// Validate pagination parameters
    pub fn validate(&self) -> Result<(), WebError> {
        if let Some(size) = self.size {
            if size == 0 {
                return Err(WebError::bad_request(
                    "Invalid pagination: size must be greater than 0",
                ));
            }
            if size > MAX_PAGE_SIZE {
                return Err(WebError::bad_request(format!(
                    "Invalid pagination: maximum size is {}",
                    MAX_PAGE_SIZE
                )));
            }
        }
        Ok(())
    }
}

/// Extract and validate pagination parameters
#[derive(Debug)]
pub struct PageableParams(pub PageRequest);

impl<S> FromRequestParts<S> for PageableParams
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageableQuery>::from_request_parts(parts, state)
            .await
            .map_err(|err| WebError::bad_request(format!("Invalid pagination parameters: {}", err)))?;

        query.validate()?;

        Ok(PageableParams(query.to_page_request()))
    }
}

#[derive(Debug, Deserialize)]
struct LocaleQuery {
    locale: Option<String>,
}

/// Language code extracted from the `locale` query parameter,
/// defaulting to `"en"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale(pub String);

impl Locale {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self("en".to_string())
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<LocaleQuery>::from_request_parts(parts, state)
            .await
            .map_err(|err| WebError::bad_request(format!("Invalid locale parameter: {}", err)))?;

        Ok(query.locale.map(Locale).unwrap_or_default())
    }
}

/// Multi-value query map for filter parameters
///
/// Unlike `Query<T>`, repeated keys are preserved instead of rejected.
#[derive(Debug, Clone, Default)]
pub struct MultiQuery(pub HashMap<String, Vec<String>>);

impl MultiQuery {
    /// Parse a raw query string
    pub fn parse(query: &str) -> Self {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            map.entry(key.into_owned()).or_default().push(value.into_owned());
        }
        Self(map)
    }

    /// First value for a key, if present
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|values| values.first()).map(String::as_str)
    }

    /// All values for a key, splitting comma-joined entries, or `None`
    /// when the parameter is absent. Absence is "no constraint", never
    /// an empty match set.
    pub fn list(&self, key: &str) -> Option<Vec<String>> {
        self.0.get(key).map(|values| {
            values
                .iter()
                .flat_map(|value| value.split(','))
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect()
        })
    }

    /// Typed variant of [`MultiQuery::list`]; a malformed element is a
    /// client error
    pub fn typed_list<T: FromStr>(&self, key: &str) -> Result<Option<Vec<T>>, WebError> {
        match self.list(key) {
            None => Ok(None),
            Some(values) => values
                .iter()
                .map(|value| {
                    value
                        .parse::<T>()
                        .map_err(|_| WebError::bad_request(format!("Invalid value for '{}': {}", key, value)))
                })
                .collect::<Result<Vec<T>, WebError>>()
                .map(Some),
        }
    }

    /// Single typed value, e.g. a boolean flag
    pub fn typed_first<T: FromStr>(&self, key: &str) -> Result<Option<T>, WebError> {
        match self.first(key) {
            None => Ok(None),
            Some(value) => value
                .parse::<T>()
                .map(Some)
                .map_err(|_| WebError::bad_request(format!("Invalid value for '{}': {}", key, value))),
        }
    }
}

impl<S> FromRequestParts<S> for MultiQuery
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::parse(parts.uri.query().unwrap_or("")))
    }
}
