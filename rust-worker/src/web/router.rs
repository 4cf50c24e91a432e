//! HTTP router construction.

use axum::{
    routing::{any, get},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::web::handlers::{handle_panic, health, relay_webhook, AppState};

/// Build the application router.
///
/// The relay is reachable at `/` and `/webhook`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(relay_webhook))
        .route("/webhook", any(relay_webhook))
        .route("/health", get(health))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
