//! Webhook endpoint handlers.
//!
//! The relay endpoint turns every outcome into a plain-text response in the
//! same request cycle:
//! 1. Reject anything that is not a POST
//! 2. Read the raw body once
//! 3. Verify, transform and forward it (see [`relay`])
//! 4. Map the result to a status code

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::dispatch::DispatchClient;
use crate::error::{worker_error, ConfigError, RelayError};
use crate::web::relay::{header_value, relay, EVENT_HEADER};
use crate::Config;

/// Largest body accepted; GitHub caps webhook payloads at 25 MB.
pub const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: DispatchClient,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let client = DispatchClient::new(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client,
        })
    }
}

// =============================================================================
// Health Check
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Health check endpoint.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

// =============================================================================
// Relay Webhook
// =============================================================================

/// GitHub webhook relay endpoint.
///
/// Mounted for every method so that non-POST requests get the relay's own
/// `405 Method not allowed` body rather than the router's empty one.
pub async fn relay_webhook(State(state): State<AppState>, request: Request) -> Response {
    if request.method() != Method::POST {
        warn!(method = %request.method(), "webhook_method_not_allowed");
        return RelayError::MethodNotAllowed.into_response();
    }

    let (parts, body) = request.into_parts();
    let event = header_value(&parts.headers, EVENT_HEADER).unwrap_or_default();

    let result = match read_body(body).await {
        Ok(bytes) => {
            info!(event = %event, body_length = bytes.len(), "webhook_received");
            relay(&state.config, &state.client, &parts.headers, &bytes).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            info!(event = %event, "webhook_relayed");
            (StatusCode::OK, "OK").into_response()
        }
        Err(e) => {
            let status = e.status_code();
            if status.is_server_error() {
                error!(event = %event, status = status.as_u16(), error = %e, "webhook_relay_failed");
            }
            e.into_response()
        }
    }
}

async fn read_body(body: Body) -> Result<axum::body::Bytes, RelayError> {
    to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| RelayError::Internal(e.to_string()))
}

/// Convert a handler panic into the catch-all 500 response.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    error!(panic = %message, "webhook_handler_panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, worker_error(message)).into_response()
}
