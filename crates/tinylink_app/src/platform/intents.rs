use tinylink_engine::SubmissionController;
use tinylink_logging::tinylink_debug;
use tokio::runtime::Handle;

use super::input::Action;

/// Forwards view actions to the controller. Edits apply synchronously so
/// keystrokes stay ordered; submit and copy run as tasks on the runtime.
pub struct IntentRunner {
    runtime: Handle,
    controller: SubmissionController,
}

impl IntentRunner {
    pub fn new(runtime: Handle, controller: SubmissionController) -> Self {
        Self {
            runtime,
            controller,
        }
    }

    /// Returns false when the user asked to quit.
    pub fn dispatch(&self, action: Action) -> bool {
        match action {
            Action::Edit(text) => self.controller.on_input_changed(text),
            Action::KeyPressed(key) => {
                let controller = self.controller.clone();
                self.runtime
                    .spawn(async move { controller.submit_on_enter(key).await });
            }
            Action::ShortenClicked => {
                tinylink_debug!("Shorten clicked");
                let controller = self.controller.clone();
                self.runtime.spawn(async move { controller.submit().await });
            }
            Action::CopyClicked => {
                tinylink_debug!("Copy clicked");
                let controller = self.controller.clone();
                self.runtime.spawn(async move { controller.copy().await });
            }
            Action::Quit => return false,
            Action::None => {}
        }
        true
    }
}
