//! TinyLink engine: network/clipboard I/O and effect execution.
mod client;
mod clipboard;
mod controller;
mod settings;

pub use client::{ReqwestShortenClient, ShortenClient};
pub use clipboard::{ArboardClipboard, ClipboardError, ClipboardPort};
pub use controller::SubmissionController;
pub use settings::{
    ControllerSettings, ShortenSettings, API_URL_ENV, DEFAULT_API_URL, DEFAULT_REQUEST_TIMEOUT,
    SHORTEN_PATH,
};
