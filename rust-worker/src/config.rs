//! Configuration module for environment variable parsing.
//!
//! Configuration is read once at startup and injected into the handler
//! through `AppState`; request handling never touches the environment.

use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::error::ConfigError;

/// Default GitHub REST API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Target repository for `repository_dispatch` events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub owner: String,
    pub repo: String,
}

impl FromStr for RepoTarget {
    type Err = ConfigError;

    /// Parse an `owner/repo` identifier.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut parts = raw.trim().split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) if !owner.is_empty() && !repo.is_empty() => {
                Ok(RepoTarget {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ConfigError::InvalidRepo(raw.to_string())),
        }
    }
}

impl fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Shared secret used to sign webhook deliveries
    pub webhook_secret: String,

    /// Personal access token for the dispatch API
    pub github_token: String,

    /// Repository that receives the dispatch events
    pub repo: RepoTarget,

    /// Base URL of the GitHub REST API
    pub api_url: String,

    /// Timeout for the outbound dispatch call
    pub request_timeout: Duration,

    /// Port for the web server to listen on
    pub port: u16,
}

// Secret and token stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("webhook_secret", &"<redacted>")
            .field("github_token", &"<redacted>")
            .field("repo", &self.repo)
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Build a configuration with default API URL, timeout and port.
    pub fn new(
        webhook_secret: impl Into<String>,
        github_token: impl Into<String>,
        repo: RepoTarget,
    ) -> Self {
        Config {
            webhook_secret: webhook_secret.into(),
            github_token: github_token.into(),
            repo,
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_millis(10_000),
            port: 8080,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let webhook_secret = required("WEBHOOK_SECRET")?;
        let github_token = required("GITHUB_PAT")?;
        let repo: RepoTarget = required("GITHUB_REPO")?.parse()?;

        let api_url = lookup("GITHUB_API_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let request_timeout_ms = parse_or_default(&lookup, "REQUEST_TIMEOUT_MS", 10_000u64);
        let port = parse_or_default(&lookup, "PORT", 8080u16);

        Ok(Config {
            webhook_secret,
            github_token,
            repo,
            api_url,
            request_timeout: Duration::from_millis(request_timeout_ms),
            port,
        })
    }
}

/// Parse a numeric variable, falling back to `default` when unset or invalid.
fn parse_or_default<F, T>(lookup: &F, name: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                warn!(env_var = name, value = %raw, "Invalid numeric value, using default");
                default
            }
        },
    }
}
