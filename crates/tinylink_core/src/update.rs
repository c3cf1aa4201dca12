use crate::{Effect, ErrorKind, Key, Msg, ShortenRequest, ShortenResult, SubmissionState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SubmissionState, msg: Msg) -> (SubmissionState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_input(text);
            Vec::new()
        }
        Msg::SubmitClicked => submit(&mut state),
        Msg::KeyPressed(Key::Enter) if !state.is_submitting() => submit(&mut state),
        Msg::KeyPressed(_) => Vec::new(),
        Msg::ShortenCompleted(result) => {
            state.settle(result);
            Vec::new()
        }
        Msg::ShortenAbandoned => {
            state.settle(ShortenResult::failure(ErrorKind::Unknown));
            Vec::new()
        }
        Msg::CopyClicked => match state.short_url() {
            Some(short_url) => vec![Effect::WriteClipboard {
                text: short_url.to_string(),
            }],
            None => Vec::new(),
        },
        Msg::CopyCompleted(Ok(())) => match state.mark_copied() {
            Some(generation) => vec![Effect::ScheduleCopiedReset { generation }],
            None => Vec::new(),
        },
        Msg::CopyCompleted(Err(_)) => {
            state.fail_with(ErrorKind::ClipboardFailure);
            Vec::new()
        }
        Msg::CopiedWindowElapsed { generation } => {
            state.expire_copied(generation);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut SubmissionState) -> Vec<Effect> {
    // Single-flight: the flag is the only gate.
    if state.is_submitting() {
        return Vec::new();
    }
    if state.long_url_input().trim().is_empty() {
        state.fail_with(ErrorKind::EmptyInput);
        return Vec::new();
    }
    let Some(request) = ShortenRequest::new(state.long_url_input()) else {
        state.fail_with(ErrorKind::MalformedUrl);
        return Vec::new();
    };

    state.begin_submission(&request);
    vec![Effect::Shorten(request)]
}
