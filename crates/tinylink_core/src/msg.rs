use crate::{ClipboardFailure, ShortenResult};

/// Keys the view forwards to the controller. Only Enter has meaning here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User clicked Shorten.
    SubmitClicked,
    /// User pressed a key while the input box had focus.
    KeyPressed(Key),
    /// User clicked Copy.
    CopyClicked,
    /// The in-flight shorten request settled.
    ShortenCompleted(ShortenResult),
    /// The in-flight shorten request was dropped before it produced a result.
    ShortenAbandoned,
    /// The clipboard write requested by `Effect::WriteClipboard` finished.
    CopyCompleted(Result<(), ClipboardFailure>),
    /// The "copied" window scheduled for `generation` ran out.
    CopiedWindowElapsed { generation: u64 },
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
