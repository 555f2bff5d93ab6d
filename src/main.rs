use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

mod cli;
mod config;
mod downloader;
mod errors;
mod fetcher;
mod models;
mod pacing;
mod storage;

use cli::{Cli, Commands};
use config::Config;
use fetcher::TranscriptClient;
use pacing::FixedDelay;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Set default log level to INFO if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "fastcalls=info");
    }

    // Initialize logging to both console and file
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    let file_appender = tracing_appender::rolling::never(".", "fastcalls.log");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(EnvFilter::from_default_env()),
        )
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_filter(EnvFilter::from_default_env()),
        )
        .init();

    let cli = Cli::parse();

    // The credential is the only hard startup requirement; fail before any
    // network or console interaction.
    let config = Config::from_env()?;
    let client = TranscriptClient::new(&config)?;
    let pacing = FixedDelay::new(config.api_delay());

    match &cli.command {
        Some(Commands::Download { ticker, output }) => {
            let ticker = ticker.to_uppercase();
            let output_dir = output
                .as_ref()
                .map(PathBuf::from)
                .unwrap_or_else(|| config.transcript_dir.clone());

            info!("Starting download of all available transcripts for {}", ticker);
            let count =
                downloader::download_all_transcripts(&client, &pacing, &ticker, &output_dir).await;
            info!("Completed downloading {} transcripts for {}", count, ticker);
        }
        None => run_interactive(&client, &pacing, &config).await?,
    }

    Ok(())
}

/// Prompt for tickers until `quit`, downloading the full history for each.
async fn run_interactive(
    client: &TranscriptClient,
    pacing: &FixedDelay,
    config: &Config,
) -> Result<()> {
    loop {
        let input: String = dialoguer::Input::new()
            .with_prompt("Enter company ticker symbol (or 'quit' to exit)")
            .allow_empty(true)
            .interact_text()?;

        let input = input.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        let ticker = input.to_uppercase();
        info!("Starting download of all available transcripts for {}", ticker);
        let count =
            downloader::download_all_transcripts(client, pacing, &ticker, &config.transcript_dir)
                .await;
        info!("Completed downloading {} transcripts for {}", count, ticker);
    }

    Ok(())
}
