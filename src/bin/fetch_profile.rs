use anyhow::Context;
use clap::Parser;
use practice_lessons::{FetchConfig, ProfileFetcher, ProfileScreen};
use std::path::PathBuf;

/// Fetch a GitHub profile and render it.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Full profile URL
    #[arg(long, conflicts_with = "user")]
    endpoint: Option<String>,

    /// GitHub login, expanded to https://api.github.com/users/<LOGIN>
    #[arg(long)]
    user: Option<String>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    practice_lessons::init_logging();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FetchConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => FetchConfig::default(),
    }
    .with_env_overrides();

    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    } else if let Some(user) = args.user {
        config.endpoint = FetchConfig::user_endpoint(&user);
    }
    let config = config.validate()?;

    let fetcher = ProfileFetcher::new(&config).context("building HTTP client")?;
    let screen = ProfileScreen::new();

    // Failures are already logged; the card falls back to placeholders.
    let _ = screen.load(&fetcher).await;

    println!("{}", screen.render());
    Ok(())
}
