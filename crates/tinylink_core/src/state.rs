use std::time::Duration;

use crate::view_model::SubmissionView;
use crate::{failure_message, ErrorKind, ShortenRequest, ShortenResult};

/// How long the "copied" feedback stays on after a successful clipboard write.
pub const COPIED_WINDOW: Duration = Duration::from_millis(2_000);

/// Single source of truth for the shortening screen. Only `update` mutates it.
///
/// Invariants kept by the mutators below:
/// - `short_url` and `error_message` are never both set.
/// - `is_copied` implies `short_url` is set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionState {
    long_url_input: String,
    short_url: Option<String>,
    submitted_url: Option<String>,
    error_message: Option<String>,
    is_submitting: bool,
    is_copied: bool,
    in_flight_url: Option<String>,
    copy_generation: u64,
    dirty: bool,
}

impl SubmissionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SubmissionView {
        SubmissionView {
            long_url_input: self.long_url_input.clone(),
            short_url: self.short_url.clone(),
            submitted_url: self.submitted_url.clone(),
            error_message: self.error_message.clone(),
            is_submitting: self.is_submitting,
            is_copied: self.is_copied,
        }
    }

    pub fn long_url_input(&self) -> &str {
        &self.long_url_input
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn is_copied(&self) -> bool {
        self.is_copied
    }

    /// Returns whether anything observable changed since the last call.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_input(&mut self, text: String) {
        self.long_url_input = text;
        self.error_message = None;
        self.dirty = true;
    }

    /// Shows `message` and drops the previous result so the two never coexist.
    pub(crate) fn fail(&mut self, message: String) {
        self.short_url = None;
        self.submitted_url = None;
        self.is_copied = false;
        self.error_message = Some(message);
        self.dirty = true;
    }

    pub(crate) fn fail_with(&mut self, kind: ErrorKind) {
        self.fail(kind.default_message().to_string());
    }

    pub(crate) fn begin_submission(&mut self, request: &ShortenRequest) {
        self.is_submitting = true;
        self.error_message = None;
        self.short_url = None;
        self.submitted_url = None;
        self.is_copied = false;
        self.in_flight_url = Some(request.original_url().to_string());
        self.dirty = true;
    }

    /// Applies the outcome of the in-flight request. Ignored when no request
    /// is in flight.
    pub(crate) fn settle(&mut self, result: ShortenResult) {
        if !self.is_submitting {
            return;
        }
        self.is_submitting = false;
        let submitted = self.in_flight_url.take();
        match result {
            ShortenResult::Success { short_url } if !short_url.trim().is_empty() => {
                self.short_url = Some(short_url);
                self.submitted_url = submitted;
                self.error_message = None;
                self.long_url_input.clear();
                self.dirty = true;
            }
            ShortenResult::Success { .. } => self.fail_with(ErrorKind::Unknown),
            ShortenResult::Failure { kind, detail } => {
                self.fail(failure_message(kind, detail.as_deref()));
            }
        }
    }

    /// Turns the copied flag on and opens a new window generation. `None` when
    /// there is no short URL left to have been copied.
    pub(crate) fn mark_copied(&mut self) -> Option<u64> {
        self.short_url.as_ref()?;
        self.copy_generation += 1;
        self.is_copied = true;
        self.dirty = true;
        Some(self.copy_generation)
    }

    /// Ends the copied window, unless a newer copy has opened another one.
    pub(crate) fn expire_copied(&mut self, generation: u64) {
        if generation == self.copy_generation && self.is_copied {
            self.is_copied = false;
            self.dirty = true;
        }
    }
}
