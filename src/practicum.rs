//! Homework status API client

use std::sync::Arc;

use serde_json::Value;

use crate::config::Config;
use crate::io::HttpClient;

/// Longest payload fragment carried inside an error message
const FRAGMENT_LIMIT: usize = 200;

/// Client for the homework review-status API
pub struct PracticumClient {
    endpoint: String,
    token: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl PracticumClient {
    pub fn new(config: &Config, http: Arc<dyn HttpClient>) -> Self {
        tracing::debug!("Created PracticumClient for {}", config.endpoint);
        Self {
            endpoint: config.endpoint.clone(),
            token: config.practicum_token.clone(),
            http,
        }
    }

    /// Query homework statuses reported since the given checkpoint.
    ///
    /// The decoded body is inspected for an in-band `code`/`error` marker in
    /// addition to the HTTP status: the API can embed an application failure
    /// in the body of a 200 response, so the marker check runs first and a
    /// non-200 status without a marker is classified separately.
    pub async fn fetch(&self, since: u64) -> crate::Result<Value> {
        let from_date = since.to_string();
        let auth = format!("OAuth {}", self.token);
        tracing::debug!("Fetching homework statuses from_date={}", from_date);

        let response = self
            .http
            .get(
                &self.endpoint,
                &[("Authorization", auth.as_str())],
                &[("from_date", from_date.as_str())],
            )
            .await?;

        let body: Option<Value> = serde_json::from_str(&response.body).ok();

        if let Some(Value::Object(record)) = &body {
            for marker in ["code", "error"] {
                if let Some(value) = record.get(marker) {
                    return Err(crate::WatchError::MalformedPayload {
                        endpoint: self.endpoint.clone(),
                        detail: format!(
                            "server reported failure under '{}' (http {}): {}",
                            marker,
                            response.status,
                            fragment(&value.to_string())
                        ),
                    });
                }
            }
        }

        if response.status != 200 {
            return Err(crate::WatchError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                status: response.status,
                from_date: since,
            });
        }

        body.ok_or_else(|| crate::WatchError::MalformedPayload {
            endpoint: self.endpoint.clone(),
            detail: format!("body is not valid JSON: {}", fragment(&response.body)),
        })
    }
}

fn fragment(body: &str) -> &str {
    match body.char_indices().nth(FRAGMENT_LIMIT) {
        Some((index, _)) => &body[..index],
        None => body,
    }
}
