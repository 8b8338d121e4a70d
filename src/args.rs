use clap::Parser;

/// Report members of a GitHub team who are not members of its organization.
#[derive(Parser, Debug, Clone)]
#[clap(
    author,
    version,
    about,
    long_about = "Fetches the member lists of a GitHub organization and one of its teams, \
                  then prints every team member who does not appear in the organization list."
)]
pub struct Args {
    /// GitHub API token sent as a Bearer token.
    #[clap(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub key: String,

    /// GitHub organization slug.
    #[clap(short, long)]
    pub org: String,

    /// Team slug within the organization.
    #[clap(short, long)]
    pub team: String,

    /// Base URL of the GitHub REST API (GitHub Enterprise uses https://<host>/api/v3).
    #[clap(long, value_name = "URL", default_value = "https://api.github.com")]
    pub api_url: String,

    /// Number of members requested per page (1-100).
    #[clap(long, value_name = "NUM", default_value = "30")]
    pub per_page: u32,

    /// Give up on a page once the retry delay would exceed this many seconds.
    #[clap(long, value_name = "SECS", default_value = "120")]
    pub max_backoff: u64,

    /// Print the result as a JSON array instead of one login per line.
    #[clap(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_flags_and_defaults() {
        let args = Args::try_parse_from([
            "github-team-audit",
            "--key",
            "tok",
            "--org",
            "acme",
            "--team",
            "platform",
        ])
        .unwrap();

        assert_eq!(args.key, "tok");
        assert_eq!(args.org, "acme");
        assert_eq!(args.team, "platform");
        assert_eq!(args.api_url, "https://api.github.com");
        assert_eq!(args.per_page, 30);
        assert_eq!(args.max_backoff, 120);
        assert!(!args.json);
    }

    #[test]
    fn org_and_team_are_required() {
        let result = Args::try_parse_from(["github-team-audit", "--key", "tok", "--org", "acme"]);
        assert!(result.is_err());
    }
}
