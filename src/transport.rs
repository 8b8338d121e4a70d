use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("github-team-audit/", env!("CARGO_PKG_VERSION"));

/// Status and body of a single GET, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// An authenticated GET against the GitHub REST API.
///
/// Non-200 statuses are returned as ordinary responses; only transport
/// failures are errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str, token: &str) -> Result<RawResponse, FetchError>;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with the crate's User-Agent; GitHub rejects requests without one.
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str, token: &str) -> Result<RawResponse, FetchError> {
        debug!("Requesting URL: {}", url);
        let response = self
            .client
            .get(url)
            .header("Accept", "application/vnd.github+json")
            .header("Authorization", format!("Bearer {}", token))
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
