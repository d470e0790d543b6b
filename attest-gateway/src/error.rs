//! Error types for the gateway crate.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors that can occur during gateway request handling.
///
/// Every variant surfaces to the caller as `{"detail": "<message>"}`. No
/// error is retried or recovered internally, and none is fatal to the
/// process; each failure is scoped to its request.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GatewayError {
    /// The `X-API-Key` header is absent or unreadable on a protected route.
    #[error("Not authenticated")]
    MissingApiKey,

    /// The request body could not be parsed, or a field violated its
    /// declared bounds.
    #[error("{0}")]
    Validation(String),

    /// Reserved in the API contract for quota exhaustion. No handler
    /// currently produces it.
    #[error("quota exhausted")]
    QuotaExhausted,

    /// Reserved in the API contract for maintenance windows. No handler
    /// currently produces it.
    #[error("service temporarily unavailable")]
    Maintenance,
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            GatewayError::MissingApiKey => StatusCode::UNAUTHORIZED,
            GatewayError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            GatewayError::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
            GatewayError::Maintenance => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, Json(json!({"detail": self.to_string()}))).into_response()
    }
}
