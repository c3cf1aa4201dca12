use std::sync::{Arc, Mutex, PoisonError};

use arboard::Clipboard;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard rejected write: {0}")]
    Rejected(String),
}

/// Platform clipboard write capability.
#[async_trait::async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// System clipboard through `arboard`.
///
/// The handle is opened on first use and kept for the life of the port: on
/// X11/Wayland the copied text is only served while a handle is alive.
#[derive(Clone, Default)]
pub struct ArboardClipboard {
    handle: Arc<Mutex<Option<Clipboard>>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl ClipboardPort for ArboardClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let handle = Arc::clone(&self.handle);
        let text = text.to_string();

        // arboard blocks on the display server; keep it off the async workers.
        tokio::task::spawn_blocking(move || {
            let mut guard = handle.lock().unwrap_or_else(PoisonError::into_inner);
            if guard.is_none() {
                let clipboard =
                    Clipboard::new().map_err(|err| ClipboardError::Unavailable(err.to_string()))?;
                *guard = Some(clipboard);
            }
            let Some(clipboard) = guard.as_mut() else {
                return Err(ClipboardError::Unavailable("no clipboard handle".to_string()));
            };
            clipboard
                .set_text(text)
                .map_err(|err| ClipboardError::Rejected(err.to_string()))
        })
        .await
        .map_err(|err| ClipboardError::Rejected(err.to_string()))?
    }
}
