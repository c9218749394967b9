//! Router assembly: HTTP endpoints, WebSocket upgrade, CORS, and HTTP tracing.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

pub mod http;
pub mod ws;

/// Build the application router with:
/// - WebSocket at `/ws`
/// - REST-ish API under `/api/v1/...`
/// - CORS (allow any origin/method/headers); adjust for production if needed
/// - HTTP trace layer (per-request spans w/ method, path, status, latency)
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // WebSocket
        .route("/ws", get(ws::ws_upgrade))
        // Stateless
        .route("/api/v1/health", get(http::http_health))
        .route("/api/v1/curriculum", get(http::http_get_curriculum))
        // Sessions
        .route("/api/v1/sessions", post(http::http_create_session))
        .route("/api/v1/sessions/:id", get(http::http_get_session).delete(http::http_delete_session))
        .route("/api/v1/sessions/:id/selection", post(http::http_post_selection))
        .route("/api/v1/sessions/:id/curriculum", get(http::http_get_session_curriculum))
        .route("/api/v1/sessions/:id/steps/complete", post(http::http_complete_step))
        .route("/api/v1/sessions/:id/steps/:step_id/start", post(http::http_start_step))
        .route("/api/v1/sessions/:id/decision", post(http::http_request_decision))
        .route("/api/v1/sessions/:id/decision/resolve", post(http::http_resolve_decision))
        .route("/api/v1/sessions/:id/verification", post(http::http_request_verification))
        .route("/api/v1/sessions/:id/verification/resolve", post(http::http_resolve_verification))
        .route("/api/v1/sessions/:id/verification/skip", post(http::http_skip_verification))
        .route("/api/v1/sessions/:id/prompt", post(http::http_submit_prompt))
        .route("/api/v1/sessions/:id/reset", post(http::http_reset))
        // State + CORS + HTTP tracing
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
