use std::fmt;

use serde::Serialize;

use crate::is_valid_url;

/// Fallback text for a rejected request whose body carries no `error`.
pub const DEFAULT_REJECTED_MESSAGE: &str = "Invalid URL format.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    MalformedUrl,
    /// The service reported the submitted URL itself as invalid (4xx).
    ClientRejected,
    ServerFault,
    Timeout,
    Unknown,
    ClipboardFailure,
}

impl ErrorKind {
    /// The fixed user-facing text for this kind.
    pub fn default_message(self) -> &'static str {
        match self {
            ErrorKind::EmptyInput => "Please enter a URL.",
            ErrorKind::MalformedUrl => "Please enter a valid URL (e.g., https://example.com).",
            ErrorKind::ClientRejected => DEFAULT_REJECTED_MESSAGE,
            ErrorKind::ServerFault => "Server error. Please try again later.",
            ErrorKind::Timeout => "Request timeout. Please try again.",
            ErrorKind::Unknown => "An error occurred. Please try again.",
            ErrorKind::ClipboardFailure => "Failed to copy to clipboard.",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::EmptyInput => write!(f, "empty input"),
            ErrorKind::MalformedUrl => write!(f, "malformed url"),
            ErrorKind::ClientRejected => write!(f, "rejected by server"),
            ErrorKind::ServerFault => write!(f, "server fault"),
            ErrorKind::Timeout => write!(f, "timeout"),
            ErrorKind::Unknown => write!(f, "unknown error"),
            ErrorKind::ClipboardFailure => write!(f, "clipboard failure"),
        }
    }
}

/// User-facing message for a failure. Only `ClientRejected` lets the server
/// choose the text; a missing or blank detail falls back to the fixed one.
pub fn failure_message(kind: ErrorKind, detail: Option<&str>) -> String {
    match kind {
        ErrorKind::ClientRejected => detail
            .filter(|text| !text.trim().is_empty())
            .unwrap_or(DEFAULT_REJECTED_MESSAGE)
            .to_string(),
        other => other.default_message().to_string(),
    }
}

/// Body of `POST /api/shorten`. Only constructible from a URL that passed
/// [`is_valid_url`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenRequest {
    original_url: String,
}

impl ShortenRequest {
    pub fn new(candidate: &str) -> Option<Self> {
        is_valid_url(candidate).then(|| Self {
            original_url: candidate.to_string(),
        })
    }

    pub fn original_url(&self) -> &str {
        &self.original_url
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenResult {
    Success {
        short_url: String,
    },
    Failure {
        kind: ErrorKind,
        detail: Option<String>,
    },
}

impl ShortenResult {
    pub fn success(short_url: impl Into<String>) -> Self {
        ShortenResult::Success {
            short_url: short_url.into(),
        }
    }

    /// A failure whose detail is the kind's fixed message.
    pub fn failure(kind: ErrorKind) -> Self {
        ShortenResult::Failure {
            kind,
            detail: Some(kind.default_message().to_string()),
        }
    }

    pub fn failure_with_detail(kind: ErrorKind, detail: Option<String>) -> Self {
        ShortenResult::Failure { kind, detail }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ShortenResult::Success { .. })
    }

    /// The message to show for this result, `None` on success.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ShortenResult::Success { .. } => None,
            ShortenResult::Failure { kind, detail } => {
                Some(failure_message(*kind, detail.as_deref()))
            }
        }
    }
}

/// A rejected clipboard write. Carries the platform's reason for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardFailure {
    pub detail: String,
}

impl ClipboardFailure {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}
