//! Engine: drives the fetch-validate-translate-notify cycle

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tokio_util::sync::CancellationToken;

use crate::homework;
use crate::notifier::Notifier;
use crate::practicum::PracticumClient;
use crate::response;
use crate::WatchError;

/// The engine owns the poll loop and the checkpoint carried across cycles
pub struct Engine {
    client: PracticumClient,
    notifier: Arc<dyn Notifier>,
    interval: Duration,
    cancel: CancellationToken,
}

impl Engine {
    pub fn new(
        client: PracticumClient,
        notifier: Arc<dyn Notifier>,
        interval: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            client,
            notifier,
            interval,
            cancel,
        }
    }

    /// Poll forever with a fixed delay between cycles. Returns when the
    /// cancellation token is triggered; the sleep is the only point where
    /// cancellation is honored.
    pub async fn run(&self) {
        let mut since = current_epoch_secs();

        loop {
            since = self.poll_once(since).await;

            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {}
                _ = self.cancel.cancelled() => {
                    tracing::debug!("Poll loop cancelled");
                    break;
                }
            }
        }
    }

    /// Run one cycle and return the checkpoint for the next one.
    ///
    /// Every failure inside the cycle is contained here: logged, turned
    /// into a best-effort diagnostic notification, and answered with an
    /// unchanged checkpoint so the next cycle re-queries the same window.
    pub async fn poll_once(&self, since: u64) -> u64 {
        match self.cycle(since).await {
            Ok(next) => next,
            Err(err) => {
                tracing::error!("Polling cycle failed: {}", err);
                let message = diagnostic(&err);
                if let Err(delivery) = self.notifier.notify(&message).await {
                    tracing::error!("Failed to deliver diagnostic: {}", delivery);
                }
                since
            }
        }
    }

    async fn cycle(&self, since: u64) -> crate::Result<u64> {
        let payload = self.client.fetch(since).await?;
        let batch = response::validate(&payload)?;

        // Newest-first ordering: only the first item is reported per cycle.
        if let Some(newest) = batch.homeworks.first() {
            let message = homework::verdict(newest)?;
            if let Err(err) = self.notifier.notify(&message).await {
                tracing::error!("Status notification failed: {}", err);
            }
        } else {
            tracing::debug!("No homework updates since {}", since);
        }

        // The checkpoint never moves backwards, whatever cursor the
        // server reports.
        Ok(batch.current_date.map_or(since, |cursor| since.max(cursor)))
    }
}

/// Operator-facing description of a cycle failure. Exhaustive over the
/// taxonomy so every failure kind has a defined message.
fn diagnostic(err: &WatchError) -> String {
    match err {
        WatchError::Transport(_) => format!("Watcher error: the status request could not complete. {err}"),
        WatchError::UnexpectedStatus { .. } => {
            format!("Watcher error: the status API answered abnormally. {err}")
        }
        WatchError::MalformedPayload { .. } => {
            format!("Watcher error: the status API returned an unusable payload. {err}")
        }
        WatchError::Schema(_) => format!("Watcher error: the status response has an unexpected shape. {err}"),
        WatchError::UnknownStatus { .. } => {
            format!("Watcher error: a homework carries an unrecognized status. {err}")
        }
        WatchError::Delivery(_) => format!("Watcher error: a notification could not be delivered. {err}"),
        WatchError::MissingConfig(_) => format!("Watcher error: configuration is incomplete. {err}"),
    }
}

fn current_epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
