use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Deserialize;
use tinylink_core::{ErrorKind, ShortenRequest, ShortenResult, DEFAULT_REJECTED_MESSAGE};
use tinylink_logging::{tinylink_debug, tinylink_info, tinylink_warn};

use crate::ShortenSettings;

/// Sends shorten requests. Implementations never fail outright: every outcome
/// is folded into a classified [`ShortenResult`].
#[async_trait::async_trait]
pub trait ShortenClient: Send + Sync {
    async fn submit(&self, request: &ShortenRequest) -> ShortenResult;
}

#[derive(Debug, Deserialize)]
struct ShortenResponse {
    short_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ReqwestShortenClient {
    settings: ShortenSettings,
}

impl ReqwestShortenClient {
    pub fn new(settings: ShortenSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ShortenSettings {
        &self.settings
    }

    fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .timeout(self.settings.request_timeout)
            .build()
    }
}

#[async_trait::async_trait]
impl ShortenClient for ReqwestShortenClient {
    async fn submit(&self, request: &ShortenRequest) -> ShortenResult {
        let endpoint = self.settings.endpoint();
        let client = match self.build_client() {
            Ok(client) => client,
            Err(err) => {
                tinylink_warn!("Failed to build HTTP client: {}", err);
                return ShortenResult::failure(ErrorKind::Unknown);
            }
        };

        tinylink_debug!(
            "POST {} url_len={} timeout_ms={}",
            endpoint,
            request.original_url().len(),
            self.settings.request_timeout.as_millis()
        );

        // One attempt only; the caller decides whether to try again.
        let response = match client
            .post(&endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => return map_reqwest_error(err),
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => return map_reqwest_error(err),
        };

        let result = classify_response(status, &body);
        if result.is_success() {
            tinylink_info!("Shortened url_len={} status={}", request.original_url().len(), status);
        }
        result
    }
}

fn classify_response(status: StatusCode, body: &str) -> ShortenResult {
    if status.is_success() {
        return match serde_json::from_str::<ShortenResponse>(body) {
            Ok(ShortenResponse {
                short_url: Some(short_url),
            }) if !short_url.trim().is_empty() => ShortenResult::success(short_url),
            _ => {
                tinylink_warn!("Status {} without a usable short_url in body", status);
                ShortenResult::failure(ErrorKind::Unknown)
            }
        };
    }

    if status.is_client_error() {
        let detail = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .and_then(|body| body.error)
            .filter(|error| !error.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REJECTED_MESSAGE.to_string());
        tinylink_warn!("Shorten rejected with status {}: {}", status, detail);
        return ShortenResult::failure_with_detail(ErrorKind::ClientRejected, Some(detail));
    }

    if status.is_server_error() {
        tinylink_warn!("Shorten failed with status {}", status);
        return ShortenResult::failure(ErrorKind::ServerFault);
    }

    tinylink_warn!("Unexpected status {}", status);
    ShortenResult::failure(ErrorKind::Unknown)
}

fn map_reqwest_error(err: reqwest::Error) -> ShortenResult {
    if err.is_timeout() {
        tinylink_warn!("Shorten request timed out: {}", err);
        return ShortenResult::failure(ErrorKind::Timeout);
    }
    tinylink_warn!("Shorten request failed: {}", err);
    ShortenResult::failure(ErrorKind::Unknown)
}
