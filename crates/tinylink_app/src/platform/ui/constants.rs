use std::time::Duration;

pub const TITLE: &str = "TinyLink";
pub const SUBTITLE: &str = "Fast & Simple URL Shortener";
pub const INPUT_TITLE: &str = " Enter URL to shorten ";
pub const RESULT_TITLE: &str = " Short URL ";
pub const ORIGINAL_URL_LABEL: &str = "Original URL: ";
pub const KEY_HINTS: &str = "Enter/Ctrl+S shorten · Ctrl+Y copy · Ctrl+U clear · Esc quit";

/// How long to wait for terminal input before checking for new snapshots.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(75);
