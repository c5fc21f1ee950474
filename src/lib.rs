//! hwwatch - Homework review-status watcher
//!
//! Polls the homework review-status API, detects status transitions, and
//! sends Telegram notifications.

pub mod config;
pub mod engine;
pub mod error;
pub mod homework;
pub mod io;
pub mod notifier;
pub mod practicum;
pub mod response;
pub mod telegram;

pub use config::Config;
pub use error::{Result, WatchError};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::engine::Engine;
use crate::io::ReqwestHttpClient;
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::telegram::TelegramNotifier;

/// Run the watcher with the given configuration
pub async fn run(config: Config) -> Result<()> {
    let http: Arc<dyn io::HttpClient> = Arc::new(ReqwestHttpClient::default());
    let cancel = CancellationToken::new();

    let client = PracticumClient::new(&config, Arc::clone(&http));
    let notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(&config, http));

    // Setup shutdown handler
    let cancel_for_signal = cancel.clone();
    tokio::spawn(async move {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for ctrl-c");
        tracing::info!("Shutdown signal received");
        cancel_for_signal.cancel();
    });

    let engine = Engine::new(client, notifier, config.poll_interval, cancel);

    tracing::info!("Watcher started");

    // Run the poll loop (blocks until cancelled)
    engine.run().await;

    tracing::info!("Watcher stopped");

    Ok(())
}
