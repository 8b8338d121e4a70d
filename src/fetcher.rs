use indicatif::ProgressBar;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::FetchError;
use crate::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::transport::{RawResponse, ReqwestTransport, Transport};

/// GitHub's default page size for list endpoints.
pub const DEFAULT_PER_PAGE: u32 = 30;

/// The part of a GitHub user object the audit cares about.
#[derive(Debug, Deserialize)]
struct MemberRecord {
    login: String,
}

/// Walks a paginated member endpoint and collects lowercase logins.
pub struct MemberFetcher<T = ReqwestTransport, S = TokioSleeper> {
    transport: T,
    sleeper: S,
    token: String,
    per_page: u32,
    retry: RetryPolicy,
    progress: ProgressBar,
}

impl<T: Transport, S: Sleeper> MemberFetcher<T, S> {
    pub fn new(transport: T, sleeper: S, token: impl Into<String>) -> Self {
        Self {
            transport,
            sleeper,
            token: token.into(),
            per_page: DEFAULT_PER_PAGE,
            retry: RetryPolicy::default(),
            progress: ProgressBar::hidden(),
        }
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Report the resource and page being fetched on a spinner.
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Fetch every page of `base_url` and return the logins in response order.
    ///
    /// Pages are requested from 1 upward; the first empty page ends the walk
    /// and no later page is requested. Duplicates are kept.
    pub async fn get_member_names(&self, base_url: &str) -> Result<Vec<String>, FetchError> {
        let mut members = Vec::new();
        let mut page: u32 = 1;

        loop {
            self.progress.set_message(format!("{} - page {}", base_url, page));
            let url = format!("{}?per_page={}&page={}", base_url, self.per_page, page);

            let response = self.get_with_backoff(&url).await?;
            let records: Vec<MemberRecord> =
                serde_json::from_str(&response.body).map_err(|source| FetchError::Decode {
                    url: url.clone(),
                    source,
                })?;

            if records.is_empty() {
                debug!("Empty page {} for {}; pagination complete", page, base_url);
                break;
            }

            info!("Fetched {} members from {} page {}", records.len(), base_url, page);
            members.extend(records.into_iter().map(|m| m.login.to_lowercase()));
            page += 1;
            self.progress.tick();
        }

        info!("Collected {} members from {}", members.len(), base_url);
        Ok(members)
    }

    /// GET `url`, retrying non-200 responses with exponential backoff.
    async fn get_with_backoff(&self, url: &str) -> Result<RawResponse, FetchError> {
        let mut backoff = self.retry.backoff();
        let mut response = self.transport.get(url, &self.token).await?;

        while !response.is_ok() {
            let delay = backoff.current();
            warn!(
                "Request failed with status code {}. Retrying in {} seconds...",
                response.status,
                delay.as_secs_f64()
            );
            self.progress.set_message(format!(
                "{} - status {}, retrying in {:?}",
                url, response.status, delay
            ));
            self.sleeper.sleep(delay).await;

            if !backoff.advance() {
                return Err(FetchError::BackoffExhausted {
                    url: url.to_string(),
                    last_status: response.status,
                });
            }
            response = self.transport.get(url, &self.token).await?;
        }

        Ok(response)
    }
}
