//! Immutable process configuration built once from the environment

use std::time::Duration;

pub const ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const POLL_INTERVAL: Duration = Duration::from_secs(600);

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Everything the watcher needs for its process lifetime.
///
/// Constructed once at startup and handed to the client and notifier
/// constructors; nothing re-reads the environment after this point.
#[derive(Clone)]
pub struct Config {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
    pub endpoint: String,
    pub poll_interval: Duration,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

impl Config {
    /// Read the three required secrets from the process environment.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let mut missing = Vec::new();
        let mut require = |name: &'static str| match lookup(name) {
            Some(value) if !value.is_empty() => value,
            _ => {
                tracing::error!("Required environment variable {} is not set", name);
                missing.push(name);
                String::new()
            }
        };

        let practicum_token = require(PRACTICUM_TOKEN);
        let telegram_token = require(TELEGRAM_TOKEN);
        let telegram_chat_id = require(TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(crate::WatchError::MissingConfig(missing.join(", ")));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: ENDPOINT.to_string(),
            poll_interval: POLL_INTERVAL,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_env(name: &str) -> Option<String> {
        match name {
            PRACTICUM_TOKEN => Some("practicum-secret".to_string()),
            TELEGRAM_TOKEN => Some("telegram-secret".to_string()),
            TELEGRAM_CHAT_ID => Some("12345".to_string()),
            _ => None,
        }
    }

    #[test]
    fn builds_from_complete_environment() {
        let config = Config::from_lookup(full_env).unwrap();
        assert_eq!(config.practicum_token, "practicum-secret");
        assert_eq!(config.telegram_token, "telegram-secret");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.endpoint, ENDPOINT);
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }

    #[test]
    fn missing_variable_is_fatal() {
        let err = Config::from_lookup(|name| {
            if name == TELEGRAM_TOKEN {
                None
            } else {
                full_env(name)
            }
        })
        .unwrap_err();

        match err {
            crate::WatchError::MissingConfig(names) => assert_eq!(names, "TELEGRAM_TOKEN"),
            other => panic!("expected MissingConfig, got {other:?}"),
        }
    }

    #[test]
    fn all_missing_variables_are_reported() {
        let err = Config::from_lookup(|_| None).unwrap_err();

        match err {
            crate::WatchError::MissingConfig(names) => {
                assert_eq!(names, "PRACTICUM_TOKEN, TELEGRAM_TOKEN, TELEGRAM_CHAT_ID");
            }
            other => panic!("expected MissingConfig, got {other:?}"),
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let err = Config::from_lookup(|name| {
            if name == PRACTICUM_TOKEN {
                Some(String::new())
            } else {
                full_env(name)
            }
        })
        .unwrap_err();

        match err {
            crate::WatchError::MissingConfig(names) => assert_eq!(names, "PRACTICUM_TOKEN"),
            other => panic!("expected MissingConfig, got {other:?}"),
        }
    }

    #[test]
    fn debug_output_hides_secrets() {
        let config = Config::from_lookup(full_env).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("practicum-secret"));
        assert!(!rendered.contains("telegram-secret"));
        assert!(rendered.contains("12345"));
    }
}
