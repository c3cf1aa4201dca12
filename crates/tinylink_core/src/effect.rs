use crate::ShortenRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send exactly one shorten request and answer with `Msg::ShortenCompleted`.
    Shorten(ShortenRequest),
    /// Write `text` to the clipboard and answer with `Msg::CopyCompleted`.
    WriteClipboard { text: String },
    /// Answer with `Msg::CopiedWindowElapsed { generation }` once the copied
    /// window has passed. Replaces any reset still pending.
    ScheduleCopiedReset { generation: u64 },
}
