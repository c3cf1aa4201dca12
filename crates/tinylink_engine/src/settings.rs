use std::time::Duration;

use tinylink_core::COPIED_WINDOW;

/// Environment variable holding the shortening service base URL.
pub const API_URL_ENV: &str = "TINYLINK_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const SHORTEN_PATH: &str = "/api/shorten";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenSettings {
    pub base_url: String,
    /// Hard client-side deadline for the whole request, body included.
    pub request_timeout: Duration,
}

impl Default for ShortenSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl ShortenSettings {
    /// Reads the base URL from [`API_URL_ENV`], falling back to the default
    /// when the variable is missing or blank.
    pub fn from_env() -> Self {
        Self::with_base_url(std::env::var(API_URL_ENV).ok())
    }

    pub fn with_base_url(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self {
            base_url,
            ..Self::default()
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), SHORTEN_PATH)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerSettings {
    /// How long `is_copied` stays on after a successful copy.
    pub copied_window: Duration,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            copied_window: COPIED_WINDOW,
        }
    }
}
