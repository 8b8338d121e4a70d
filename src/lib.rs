//! # GitHub Team Audit
//!
//! Finds members of a GitHub team who are not members of the team's
//! organization. Both member lists are read page by page from the GitHub
//! REST API, retrying failed requests with exponential backoff.
//!
//! ## Main Components
//!
//! - [`MemberFetcher`]: walks a paginated member endpoint and collects lowercase logins
//! - [`TeamAuditor`]: fetches the organization and team lists and computes the difference
//! - [`AuditConfig`]: resolved settings for one run, built from [`Args`]
//!
//! ## Example
//!
//! ```no_run
//! use github_team_audit_lib::{
//!     Args, AuditConfig, MemberFetcher, ReqwestTransport, TeamAuditor, TokioSleeper,
//! };
//! use clap::Parser;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//!     let config = AuditConfig::from_args(&Args::parse())?;
//!
//!     let transport = ReqwestTransport::new()?;
//!     let fetcher = MemberFetcher::new(transport, TokioSleeper, config.token.clone())
//!         .with_per_page(config.per_page)
//!         .with_retry(config.retry);
//!
//!     if let Some(missing) = TeamAuditor::new(fetcher, &config).compare().await {
//!         println!("{:?}", missing);
//!     }
//!     Ok(())
//! }
//! ```

mod args;
mod comparator;
mod config;
mod error;
mod fetcher;
mod retry;
mod transport;

#[cfg(test)]
mod testing;

pub use crate::args::Args;
pub use crate::comparator::{missing_members, TeamAuditor};
pub use crate::config::AuditConfig;
pub use crate::error::{ConfigError, FetchError};
pub use crate::fetcher::{MemberFetcher, DEFAULT_PER_PAGE};
pub use crate::retry::{Backoff, RetryPolicy, Sleeper, TokioSleeper};
pub use crate::transport::{RawResponse, ReqwestTransport, Transport};
