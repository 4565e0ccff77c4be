use clap::Parser;

use slackmoji::cli::Cli;
use slackmoji::config::{ApiConfig, RetryConfig};
use slackmoji::errors::AppResult;
use slackmoji::uploader::{run_batch, SlackClient};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let token = cli.resolved_token()?;
    let prefix = cli.resolved_prefix();
    let suffix = cli.resolved_suffix();

    let client = SlackClient::new(ApiConfig::new(cli.api_base.as_str(), token))?;
    let summary = run_batch(
        &client,
        &RetryConfig::default(),
        &prefix,
        &suffix,
        &cli.files,
    )
    .await?;

    summary.print();
    Ok(())
}
