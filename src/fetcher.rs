use crate::config::FetchConfig;
use crate::profile::{Profile, ProfileError};
use log::{debug, info};
use reqwest::{Client, StatusCode, Url};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

// =============================================================================
// Error taxonomy
// =============================================================================

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid response: HTTP {status}")]
    InvalidResponse { status: u16 },

    #[error("invalid data: {0}")]
    InvalidData(#[from] ProfileError),

    #[error("unexpected error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    InvalidUrl,
    InvalidResponse,
    InvalidData,
    Unexpected,
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::InvalidUrl(_) => FetchErrorKind::InvalidUrl,
            FetchError::InvalidResponse { .. } => FetchErrorKind::InvalidResponse,
            FetchError::InvalidData(_) => FetchErrorKind::InvalidData,
            FetchError::Transport(_) => FetchErrorKind::Unexpected,
        }
    }
}

impl fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FetchErrorKind::InvalidUrl => "invalid URL",
            FetchErrorKind::InvalidResponse => "invalid response",
            FetchErrorKind::InvalidData => "invalid data",
            FetchErrorKind::Unexpected => "unexpected error",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Fetcher
// =============================================================================

/// Issues exactly one GET per [`fetch`](ProfileFetcher::fetch). No retries, no caching.
pub struct ProfileFetcher {
    client: Client,
    endpoint: String,
}

impl ProfileFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
        })
    }

    pub async fn fetch(&self) -> Result<Profile, FetchError> {
        let url = Url::parse(&self.endpoint)?;
        info!("Fetching profile: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::InvalidResponse {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!("Received {} bytes", body.len());
        Ok(Profile::from_slice(&body)?)
    }
}
