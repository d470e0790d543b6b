//! Axum route handlers for the attest gateway API.

use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::debug;

use attest_core::{AuthCheckRequest, SessionRequest};

use crate::{auth::ApiKey, cors::CorsConfig, extract::ValidatedJson};

// ── Response types ───────────────────────────────────────────────────────────

/// Body returned by the service status probe.
#[derive(Debug, Serialize)]
pub struct ServerStatus {
    pub server: &'static str,
}

/// Canned body returned by both stubbed POST endpoints.
///
/// The declared contract for these routes is [`attest_core::SessionCreated`]
/// and [`attest_core::AuthCheckResult`]; the handlers answer with this string
/// instead. See DESIGN.md before changing either side of that mismatch.
pub const PLACEHOLDER_BODY: &str = "Fake response for the assessment purposes";

// ── Router ────────────────────────────────────────────────────────────────────

/// Build the application router with the given cross-origin policy.
pub fn create_router(cors: CorsConfig) -> Router {
    Router::new()
        .route("/", get(server_status))
        .route("/sessions/", post(create_session))
        .route("/auth/check/", post(auth_check))
        .layer(TraceLayer::new_for_http())
        .layer(cors.into_layer())
}

// ── Handlers ──────────────────────────────────────────────────────────────────

/// `GET /` — service status probe.
pub async fn server_status() -> impl IntoResponse {
    (StatusCode::OK, Json(ServerStatus { server: "ok" }))
}

/// `POST /sessions/` — accept a session intake record.
///
/// The key gate and schema validation run in the extractors, so the body
/// here only executes for a keyed, in-bounds request. Session creation is
/// stubbed: no ID is assigned and nothing is stored.
pub async fn create_session(
    _key: ApiKey,
    ValidatedJson(body): ValidatedJson<SessionRequest>,
) -> impl IntoResponse {
    debug!(timestamp = body.timestamp, ip = %body.ip, "session intake accepted");
    (StatusCode::CREATED, Json(PLACEHOLDER_BODY))
}

/// `POST /auth/check/` — accept an authenticity-check record.
///
/// Scoring is stubbed: no verdict is computed and nothing is stored.
pub async fn auth_check(
    _key: ApiKey,
    ValidatedJson(body): ValidatedJson<AuthCheckRequest>,
) -> impl IntoResponse {
    debug!(session_id = body.session_id, "authenticity check accepted");
    (StatusCode::OK, Json(PLACEHOLDER_BODY))
}
