//! Async HTTP client for the `repository_dispatch` endpoint.
//!
//! One client is built at startup and shared across requests; the
//! underlying `reqwest::Client` pools connections and is cheap to clone.

use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client,
};
use tracing::{info, warn};
use url::Url;

use super::types::{self, DispatchEnvelope, API_VERSION, API_VERSION_HEADER};
use crate::config::{Config, RepoTarget};
use crate::error::{ConfigError, RelayError};

/// Forwards dispatch envelopes to one configured repository.
#[derive(Clone)]
pub struct DispatchClient {
    http: Client,
    endpoint: Url,
    token: String,
}

impl DispatchClient {
    /// Create a client for the repository and API host in `config`.
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let endpoint = dispatch_endpoint(&config.api_url, &config.repo)?;

        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token: config.github_token.clone(),
        })
    }

    /// URL that envelopes are posted to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one envelope.
    ///
    /// Non-2xx answers become [`RelayError::Downstream`] carrying the
    /// status code and response text. Nothing is retried.
    pub async fn dispatch(&self, envelope: &DispatchEnvelope) -> Result<(), RelayError> {
        let body = serde_json::to_vec(envelope)?;

        let response = self
            .http
            .post(self.endpoint.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, types::ACCEPT)
            .header(USER_AGENT, types::USER_AGENT)
            .header(API_VERSION_HEADER, API_VERSION)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            warn!(
                status = status.as_u16(),
                body_length = body.len(),
                event_type = ?envelope.event_type,
                "dispatch_rejected"
            );
            return Err(RelayError::Downstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(
            status = status.as_u16(),
            event_type = ?envelope.event_type,
            "dispatch_sent"
        );

        Ok(())
    }
}

/// Build `<api_url>/repos/{owner}/{repo}/dispatches`.
fn dispatch_endpoint(api_url: &str, repo: &RepoTarget) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidApiUrl {
        url: api_url.to_string(),
        reason,
    };

    let mut url = Url::parse(api_url).map_err(|e| invalid(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|_| invalid("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .extend(["repos", repo.owner.as_str(), repo.repo.as_str(), "dispatches"]);

    Ok(url)
}
