//! Error types for configuration and request relaying.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),

    #[error("GITHUB_REPO must look like owner/repo, got {0:?}")]
    InvalidRepo(String),

    #[error("invalid GitHub API URL {url:?}: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Every way a single relay request can fail.
///
/// Each variant maps to exactly one plain-text HTTP response.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing signature")]
    MissingSignature,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("{0}")]
    Payload(#[from] serde_json::Error),

    #[error("GitHub API error: {status} {body}")]
    Downstream { status: u16, body: String },

    #[error("GitHub API timeout: {0}")]
    Timeout(String),

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("{0}")]
    Internal(String),
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout(err.to_string())
        } else {
            RelayError::Transport(err)
        }
    }
}

impl RelayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            RelayError::MissingSignature | RelayError::InvalidSignature => {
                StatusCode::UNAUTHORIZED
            }
            RelayError::Downstream { .. } => StatusCode::BAD_GATEWAY,
            RelayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            RelayError::Payload(_) | RelayError::Transport(_) | RelayError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Plain-text body returned to the webhook sender.
    pub fn response_body(&self) -> String {
        match self {
            RelayError::Payload(_) | RelayError::Transport(_) | RelayError::Internal(_) => {
                worker_error(self)
            }
            _ => self.to_string(),
        }
    }
}

/// Render an unexpected fault the way the catch-all boundary reports it.
pub fn worker_error(message: impl std::fmt::Display) -> String {
    format!("Worker error: {}", message)
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status_code(), self.response_body()).into_response()
    }
}
