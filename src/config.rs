use tokio::time::Duration;

use crate::args::Args;
use crate::error::ConfigError;
use crate::retry::{RetryPolicy, DEFAULT_INITIAL_BACKOFF};

/// Everything one audit run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    pub token: String,
    pub api_base: String,
    pub org: String,
    pub team: String,
    pub per_page: u32,
    pub retry: RetryPolicy,
}

impl AuditConfig {
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let token = args.key.trim();
        if token.is_empty() {
            return Err(ConfigError::MissingToken);
        }
        if !(1..=100).contains(&args.per_page) {
            return Err(ConfigError::InvalidPerPage(args.per_page));
        }
        if args.max_backoff == 0 {
            return Err(ConfigError::InvalidMaxBackoff);
        }

        Ok(Self {
            token: token.to_string(),
            api_base: args.api_url.trim_end_matches('/').to_string(),
            org: non_empty(&args.org, "Organization")?,
            team: non_empty(&args.team, "Team")?,
            per_page: args.per_page,
            retry: RetryPolicy::new(
                DEFAULT_INITIAL_BACKOFF,
                Duration::from_secs(args.max_backoff),
            )?,
        })
    }

    pub fn org_members_url(&self) -> String {
        format!("{}/orgs/{}/members", self.api_base, self.org)
    }

    pub fn team_members_url(&self) -> String {
        format!("{}/orgs/{}/teams/{}/members", self.api_base, self.org, self.team)
    }
}

fn non_empty(value: &str, field: &'static str) -> Result<String, ConfigError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ConfigError::EmptySlug { field })
    } else {
        Ok(value.to_string())
    }
}
