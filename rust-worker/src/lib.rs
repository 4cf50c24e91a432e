//! Webhook Relay - GitHub webhook to `repository_dispatch` bridge.
//!
//! This library provides the modules behind the `webhook-relay` binary:
//! - `web`: HTTP surface, signature verification and the relay core
//! - `dispatch`: outbound client for the GitHub dispatch API
//! - `config`: environment-driven configuration
//!
//! ## Architecture
//!
//! ```text
//! GitHub webhook → Web Server (verify HMAC) → POST /repos/{owner}/{repo}/dispatches
//! ```

pub mod config;
pub mod dispatch;
pub mod error;
pub mod web;

// Re-export commonly used types
pub use config::{Config, RepoTarget};
pub use dispatch::{DispatchClient, DispatchEnvelope};
pub use error::{ConfigError, RelayError};
pub use web::{build_router, AppState};
