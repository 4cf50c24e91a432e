//! Dispatch module for the GitHub `repository_dispatch` API.
//!
//! This module provides:
//! - The dispatch envelope sent to GitHub
//! - An HTTP client that forwards envelopes to the configured repository
//!
//! ## Flow
//!
//! ```text
//! GitHub webhook → Relay → POST /repos/{owner}/{repo}/dispatches
//! ```

pub mod client;
pub mod types;

pub use client::DispatchClient;
pub use types::{DispatchEnvelope, ACCEPT, API_VERSION, USER_AGENT};
