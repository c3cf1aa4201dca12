pub const INPUT_PLACEHOLDER: &str = "Paste your URL here (e.g., https://example.com)";
pub const SUBMIT_LABEL: &str = "Shorten";
pub const SUBMITTING_LABEL: &str = "Processing...";
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "✓ Copied";

/// Where the submission workflow stands, derived from the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Read-only snapshot handed to the view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionView {
    pub long_url_input: String,
    pub short_url: Option<String>,
    /// The URL that produced `short_url`.
    pub submitted_url: Option<String>,
    pub error_message: Option<String>,
    pub is_submitting: bool,
    pub is_copied: bool,
}

impl SubmissionView {
    pub fn phase(&self) -> Phase {
        if self.is_submitting {
            Phase::Submitting
        } else if self.error_message.is_some() {
            Phase::Failed
        } else if self.short_url.is_some() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }

    /// Mirrors the submit guard so the view can disable its trigger.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.long_url_input.trim().is_empty()
    }

    pub fn can_copy(&self) -> bool {
        self.short_url.is_some()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.is_copied {
            COPIED_LABEL
        } else {
            COPY_LABEL
        }
    }
}
