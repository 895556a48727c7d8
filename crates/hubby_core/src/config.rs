use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_INVALID_URL_MESSAGE: &str = "Please enter a valid X or Twitter URL";

const DEFAULT_PASTE_SETTLE_MS: u64 = 100;
const DEFAULT_STATUS_TIMEOUT_MS: u64 = 5_000;

/// Tunables for the form controller.
///
/// Pages may override them with a JSON object; missing keys keep their
/// defaults:
///
/// ```json
/// { "paste_settle_ms": 0, "status_timeout_ms": 8000 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConfig {
    /// Delay between a paste event and revalidation. Zero disables the timer.
    pub paste_settle: Duration,
    /// How long a status message stays visible.
    pub status_timeout: Duration,
    /// Message shown when a submission is blocked.
    pub invalid_url_message: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            paste_settle: Duration::from_millis(DEFAULT_PASTE_SETTLE_MS),
            status_timeout: Duration::from_millis(DEFAULT_STATUS_TIMEOUT_MS),
            invalid_url_message: DEFAULT_INVALID_URL_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid_url_message must not be empty")]
    EmptyMessage,
    #[error("status_timeout_ms must be greater than zero")]
    ZeroStatusTimeout,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    paste_settle_ms: u64,
    status_timeout_ms: u64,
    invalid_url_message: String,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            paste_settle_ms: DEFAULT_PASTE_SETTLE_MS,
            status_timeout_ms: DEFAULT_STATUS_TIMEOUT_MS,
            invalid_url_message: DEFAULT_INVALID_URL_MESSAGE.to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;
        if raw.invalid_url_message.trim().is_empty() {
            return Err(ConfigError::EmptyMessage);
        }
        if raw.status_timeout_ms == 0 {
            return Err(ConfigError::ZeroStatusTimeout);
        }
        Ok(Self {
            paste_settle: Duration::from_millis(raw.paste_settle_ms),
            status_timeout: Duration::from_millis(raw.status_timeout_ms),
            invalid_url_message: raw.invalid_url_message,
        })
    }
}
