//! TinyLink core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod outcome;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::{Key, Msg};
pub use outcome::{
    failure_message, ClipboardFailure, ErrorKind, ShortenRequest, ShortenResult,
    DEFAULT_REJECTED_MESSAGE,
};
pub use state::{SubmissionState, COPIED_WINDOW};
pub use update::update;
pub use validate::is_valid_url;
pub use view_model::{
    Phase, SubmissionView, COPIED_LABEL, COPY_LABEL, INPUT_PLACEHOLDER, SUBMITTING_LABEL,
    SUBMIT_LABEL,
};
