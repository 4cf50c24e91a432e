//! Web server module for relaying GitHub webhooks.
//!
//! This module provides a small web server that:
//! - Receives GitHub webhook deliveries
//! - Verifies the `X-Hub-Signature-256` HMAC over the raw body
//! - Forwards verified events as `repository_dispatch` calls
//! - Answers with a plain-text status in the same request cycle

pub mod handlers;
pub mod relay;
pub mod router;
pub mod signature;

pub use handlers::{health, relay_webhook, AppState, HealthResponse};
pub use relay::{build_envelope, header_value, relay, EVENT_HEADER};
pub use router::build_router;
pub use signature::{compute_signature, verify_signature, SIGNATURE_HEADER};
