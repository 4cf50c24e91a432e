//! Relay core: authenticate one delivery and forward it as a dispatch.
//!
//! Order matters here. The signature is checked over the raw bytes before
//! the body is parsed, and nothing reaches GitHub unless it verified.

use axum::http::HeaderMap;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::dispatch::{DispatchClient, DispatchEnvelope};
use crate::error::RelayError;
use crate::web::signature::{verify_signature, SIGNATURE_HEADER};

/// Header naming the GitHub event type.
pub const EVENT_HEADER: &str = "x-github-event";

/// Verify, transform and forward one webhook delivery.
pub async fn relay(
    config: &Config,
    client: &DispatchClient,
    headers: &HeaderMap,
    body: &[u8],
) -> Result<(), RelayError> {
    let signature = match header_value(headers, SIGNATURE_HEADER).filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            warn!(body_length = body.len(), "signature_missing");
            return Err(RelayError::MissingSignature);
        }
    };

    if !verify_signature(&config.webhook_secret, body, &signature) {
        warn!(body_length = body.len(), "signature_invalid");
        return Err(RelayError::InvalidSignature);
    }

    let payload: Value = serde_json::from_slice(body)?;
    let envelope = build_envelope(headers, payload);

    info!(
        event_type = ?envelope.event_type,
        repo = %config.repo,
        "dispatch_forwarding"
    );

    client.dispatch(&envelope).await
}

/// Wrap a verified payload with the event type from the inbound headers.
pub fn build_envelope(headers: &HeaderMap, payload: Value) -> DispatchEnvelope {
    DispatchEnvelope::new(header_value(headers, EVENT_HEADER), payload)
}

/// Read a header, joining repeated values with `", "`.
///
/// A repeated signature header therefore never matches a single digest.
pub fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<String> = headers
        .get_all(name)
        .iter()
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}
