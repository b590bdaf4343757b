use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use github_client::GithubClient;
use tracing_subscriber::EnvFilter;

use follower::{run, FollowConfig};

/// Scan an organization's roster and follow every member whose profile
/// clears the completeness bar.
#[derive(Parser)]
#[command(name = "follow-org", version)]
struct Args {
    /// GitHub login used for basic auth
    username: String,

    /// Personal access token for that login
    token: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Malformed invocation is the one fatal error; nothing has touched the
    // network yet at this point.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    // Run logs go to stderr so stdout stays clean for the result listing.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = FollowConfig::default();
    let github = GithubClient::new(&args.username, &args.token)?;

    println!(
        "{} {}",
        "Scanning organization:".bold(),
        config.organization.cyan()
    );

    let summary = run(Arc::new(github), &config).await;

    let listing = serde_json::to_string_pretty(&summary.qualified)?;
    let count = summary.qualified.len().to_string();
    let outcome = format!(
        "Done following {} organization members ({} failed).",
        summary.report.followed, summary.report.failed
    );

    println!();
    println!("{}", "Qualified members:".bold());
    println!("{}", listing.magenta());
    println!("{} {}", "Qualified members length:".bold(), count.magenta());
    println!("{}", outcome.yellow().bold());

    Ok(())
}
