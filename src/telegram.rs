//! Telegram Bot API notification client

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::io::HttpClient;
use crate::notifier::Notifier;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Sends messages to one fixed chat through the Telegram Bot API
pub struct TelegramNotifier {
    send_url: String,
    chat_id: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for TelegramNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramNotifier")
            .field("chat_id", &self.chat_id)
            .finish()
    }
}

impl TelegramNotifier {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        let send_url = format!(
            "{}/bot{}/sendMessage",
            TELEGRAM_API_URL, config.telegram_token
        );

        tracing::debug!("Created TelegramNotifier for chat {}", config.telegram_chat_id);

        Self {
            send_url,
            chat_id: config.telegram_chat_id.clone(),
            http,
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, message: &str) -> crate::Result<()> {
        let params = [("chat_id", self.chat_id.as_str()), ("text", message)];

        let response = self
            .http
            .post_form(&self.send_url, &params)
            .await
            .map_err(|e| crate::WatchError::Delivery(e.to_string()))?;

        if response.status != 200 {
            return Err(crate::WatchError::Delivery(format!(
                "Telegram API returned status {}: {}",
                response.status, response.body
            )));
        }

        tracing::info!("Message \"{}\" delivered to chat {}", message, self.chat_id);
        Ok(())
    }
}
