//! hwwatch CLI
//!
//! Command-line entry point for the homework review-status watcher.

use clap::Parser;
use hwwatch::Config;
use tracing::Level;

#[derive(Parser)]
#[command(name = "hwwatch")]
#[command(about = "Homework review-status watcher with Telegram notifications")]
#[command(version)]
struct Args {
    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    dotenvy::dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("Cannot start: {}", err);
            return Err(err.into());
        }
    };

    tracing::info!("Starting watcher for chat {}", config.telegram_chat_id);
    tracing::debug!("Configuration: {:?}", config);

    hwwatch::run(config).await?;

    Ok(())
}
