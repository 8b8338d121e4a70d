use std::error::Error;

use clap::Parser;
use dotenv::dotenv;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use github_team_audit_lib::{
    Args, AuditConfig, MemberFetcher, ReqwestTransport, TeamAuditor, TokioSleeper,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenv().ok();
    let args = Args::parse();

    let config = match AuditConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            return Err(e.into());
        }
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {wide_msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.enable_steady_tick(Duration::from_millis(80));

    let fetcher = MemberFetcher::new(ReqwestTransport::new()?, TokioSleeper, config.token.clone())
        .with_per_page(config.per_page)
        .with_retry(config.retry)
        .with_progress(spinner.clone());

    info!("Comparing team '{}' against organization '{}'", config.team, config.org);
    let result = TeamAuditor::new(fetcher, &config).compare().await;
    spinner.finish_and_clear();

    if let Some(missing) = result {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&missing)?);
        } else {
            for login in &missing {
                println!("{}", login);
            }
        }
    }

    Ok(())
}
