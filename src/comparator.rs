use std::collections::HashSet;

use tracing::{debug, info};

use crate::config::AuditConfig;
use crate::error::FetchError;
use crate::fetcher::MemberFetcher;
use crate::retry::Sleeper;
use crate::transport::Transport;

/// Team members absent from `org`, in team order.
///
/// Both lists are expected to hold lowercase logins already. Duplicates in
/// `team` are kept as long as they are not in `org`.
pub fn missing_members(team: &[String], org: &[String]) -> Vec<String> {
    let org: HashSet<&str> = org.iter().map(String::as_str).collect();
    team.iter()
        .filter(|member| !org.contains(member.as_str()))
        .cloned()
        .collect()
}

/// Compares a team's member list against its organization's.
pub struct TeamAuditor<T, S> {
    fetcher: MemberFetcher<T, S>,
    org_url: String,
    team_url: String,
}

impl<T: Transport, S: Sleeper> TeamAuditor<T, S> {
    pub fn new(fetcher: MemberFetcher<T, S>, config: &AuditConfig) -> Self {
        Self {
            fetcher,
            org_url: config.org_members_url(),
            team_url: config.team_members_url(),
        }
    }

    /// Fetch the organization list, then the team list, and diff them.
    pub async fn try_compare(&self) -> Result<Vec<String>, FetchError> {
        let org_members = self.fetcher.get_member_names(&self.org_url).await?;
        let team_members = self.fetcher.get_member_names(&self.team_url).await?;

        let missing = missing_members(&team_members, &org_members);
        info!(
            "{} of {} team members are not organization members",
            missing.len(),
            team_members.len()
        );
        Ok(missing)
    }

    /// Like [`try_compare`](Self::try_compare), but reports a failure and yields `None`.
    pub async fn compare(&self) -> Option<Vec<String>> {
        match self.try_compare().await {
            Ok(missing) => Some(missing),
            Err(e) => {
                debug!("Comparison failed: {:?}", e);
                eprintln!("{}", e);
                None
            }
        }
    }
}
