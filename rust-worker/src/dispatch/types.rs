//! Dispatch message types and fixed API headers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Media type requested from the GitHub REST API.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Identifying user agent for outbound requests.
pub const USER_AGENT: &str = "github-webhook-relay";

/// Pinned REST API version.
pub const API_VERSION: &str = "2022-11-28";

/// Header carrying the pinned API version.
pub const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";

/// Body of a `repository_dispatch` request.
///
/// `event_type` is the inbound `x-github-event` header verbatim and
/// serializes as `null` when the header was absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DispatchEnvelope {
    pub event_type: Option<String>,
    pub client_payload: Value,
}

impl DispatchEnvelope {
    pub fn new(event_type: Option<String>, client_payload: Value) -> Self {
        Self {
            event_type,
            client_payload,
        }
    }
}
