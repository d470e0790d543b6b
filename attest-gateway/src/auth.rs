//! API-key gate for the protected routes.
//!
//! The gate requires the key to be *present*; it is never checked against a
//! registry, quota, or expiry. Adding verification is a product decision,
//! not a bug fix.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};
use tracing::debug;

use crate::error::GatewayError;

/// Name of the request header carrying the caller's API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Extractor that requires an `X-API-Key` header on the request.
///
/// Runs before the body extractor, so a missing key short-circuits the
/// request before any payload validation happens.
#[derive(Debug, Clone)]
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let key = extract_api_key(&parts.headers)?;
        debug!(key_len = key.len(), "api key present");
        Ok(ApiKey(key))
    }
}

/// Pull the API key out of the request headers.
///
/// # Errors
/// Returns [`GatewayError::MissingApiKey`] if the header is absent or its
/// value is not readable as a string.
pub fn extract_api_key(headers: &HeaderMap) -> Result<String, GatewayError> {
    let value = headers
        .get(API_KEY_HEADER)
        .ok_or(GatewayError::MissingApiKey)?;
    let key = value.to_str().map_err(|_| GatewayError::MissingApiKey)?;
    Ok(key.trim().to_owned())
}
