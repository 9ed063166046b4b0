use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/users/jonathanlevi";
pub const GITHUB_USERS_URL: &str = "https://api.github.com/users";

pub const ENDPOINT_ENV: &str = "PROFILE_ENDPOINT";
pub const USER_AGENT_ENV: &str = "PROFILE_USER_AGENT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("endpoint must not be empty")]
    EmptyEndpoint,

    #[error("timeout_secs must be greater than zero")]
    ZeroTimeout,
}

/// Settings for [`ProfileFetcher`](crate::ProfileFetcher).
///
/// Layered as defaults, then an optional TOML file, then the environment,
/// then whatever the caller sets explicitly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub endpoint: String,
    pub user_agent: String,
    /// `None` keeps the client's default (no per-request timeout).
    pub timeout_secs: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("practice-lessons/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: None,
        }
    }
}

impl FetchConfig {
    pub fn user_endpoint(login: &str) -> String {
        format!("{GITHUB_USERS_URL}/{login}")
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `PROFILE_ENDPOINT` / `PROFILE_USER_AGENT` from `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(endpoint) = lookup(ENDPOINT_ENV) {
            self.endpoint = endpoint;
        }
        if let Some(agent) = lookup(USER_AGENT_ENV) {
            self.user_agent = agent;
        }
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::EmptyEndpoint);
        }
        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }
}
