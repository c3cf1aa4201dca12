use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use tinylink_core::{
    update, ClipboardFailure, Effect, Key, Msg, ShortenResult, SubmissionState, SubmissionView,
};
use tinylink_logging::{tinylink_debug, tinylink_info, tinylink_warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::{ClipboardPort, ControllerSettings, ShortenClient};

/// Drives the submission state machine: applies user intents, runs the
/// resulting effects against the client and clipboard, and publishes every
/// changed snapshot to subscribers.
///
/// Cheap to clone; clones share the same state.
#[derive(Clone)]
pub struct SubmissionController {
    inner: Arc<Inner>,
}

struct Inner {
    state: Mutex<SubmissionState>,
    updates: watch::Sender<SubmissionView>,
    client: Arc<dyn ShortenClient>,
    clipboard: Arc<dyn ClipboardPort>,
    settings: ControllerSettings,
    copied_reset: Mutex<Option<JoinHandle<()>>>,
}

impl SubmissionController {
    pub fn new(
        client: Arc<dyn ShortenClient>,
        clipboard: Arc<dyn ClipboardPort>,
        settings: ControllerSettings,
    ) -> Self {
        let state = SubmissionState::new();
        let (updates, _) = watch::channel(state.view());
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                updates,
                client,
                clipboard,
                settings,
                copied_reset: Mutex::new(None),
            }),
        }
    }

    /// Current read-only snapshot.
    pub fn snapshot(&self) -> SubmissionView {
        self.inner.updates.borrow().clone()
    }

    /// Receiver that is marked changed whenever the snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionView> {
        self.inner.updates.subscribe()
    }

    pub fn on_input_changed(&self, text: impl Into<String>) {
        let effects = self.inner.apply(Msg::InputChanged(text.into()));
        debug_assert!(effects.is_empty(), "input edits never produce effects");
    }

    /// Validates the input and, if it passes and nothing is in flight, sends
    /// one shorten request. Returns once that request has settled.
    pub async fn submit(&self) {
        self.run(Msg::SubmitClicked).await;
    }

    /// Same as [`submit`](Self::submit), but only for the Enter key.
    pub async fn submit_on_enter(&self, key: Key) {
        self.run(Msg::KeyPressed(key)).await;
    }

    /// Copies the current short URL, if any. Returns once the clipboard write
    /// has finished; the copied flag reverts on its own later.
    pub async fn copy(&self) {
        self.run(Msg::CopyClicked).await;
    }

    async fn run(&self, msg: Msg) {
        let mut pending: VecDeque<Effect> = self.inner.apply(msg).into();
        while let Some(effect) = pending.pop_front() {
            pending.extend(self.execute(effect).await);
        }
    }

    async fn execute(&self, effect: Effect) -> Vec<Effect> {
        match effect {
            Effect::Shorten(request) => {
                let in_flight = InFlight::new(&self.inner);
                let result = self.inner.client.submit(&request).await;
                if let ShortenResult::Failure { kind, detail } = &result {
                    tinylink_warn!("Shorten attempt failed: kind={} detail={:?}", kind, detail);
                }
                in_flight.settle(result)
            }
            Effect::WriteClipboard { text } => {
                let result = self
                    .inner
                    .clipboard
                    .write_text(&text)
                    .await
                    .map_err(|err| {
                        tinylink_warn!("Failed to copy to clipboard: {}", err);
                        ClipboardFailure::new(err.to_string())
                    });
                self.inner.apply(Msg::CopyCompleted(result))
            }
            Effect::ScheduleCopiedReset { generation } => {
                self.schedule_copied_reset(generation);
                Vec::new()
            }
        }
    }

    fn schedule_copied_reset(&self, generation: u64) {
        let inner = Arc::clone(&self.inner);
        let window = self.inner.settings.copied_window;
        let task = tokio::spawn(async move {
            tokio::time::sleep(window).await;
            inner.apply(Msg::CopiedWindowElapsed { generation });
        });

        let mut slot = self
            .inner
            .copied_reset
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(task) {
            previous.abort();
        }
        tinylink_debug!("Copied window {} open for {:?}", generation, window);
    }
}

impl Inner {
    fn apply(&self, msg: Msg) -> Vec<Effect> {
        let mut guard = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let state = std::mem::take(&mut *guard);
        let (mut state, effects) = update(state, msg);
        if state.consume_dirty() {
            self.updates.send_replace(state.view());
        }
        *guard = state;
        effects
    }
}

/// Clears the submitting flag if the request future goes away before a
/// result is applied (dropped by its caller, or a panicking client).
struct InFlight<'a> {
    inner: &'a Inner,
    settled: bool,
}

impl<'a> InFlight<'a> {
    fn new(inner: &'a Inner) -> Self {
        Self {
            inner,
            settled: false,
        }
    }

    fn settle(mut self, result: ShortenResult) -> Vec<Effect> {
        self.settled = true;
        self.inner.apply(Msg::ShortenCompleted(result))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            tinylink_info!("Shorten request abandoned before it settled");
            self.inner.apply(Msg::ShortenAbandoned);
        }
    }
}
