use std::sync::Once;

use tinylink_core::{
    update, Effect, ErrorKind, Key, Msg, Phase, ShortenRequest, ShortenResult, SubmissionState,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(tinylink_logging::initialize_for_tests);
}

fn submit_input(state: SubmissionState, input: &str) -> (SubmissionState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::SubmitClicked)
}

fn request(url: &str) -> ShortenRequest {
    ShortenRequest::new(url).expect("valid url")
}

fn assert_exclusive(state: &SubmissionState) {
    assert!(
        state.short_url().is_none() || state.error_message().is_none(),
        "short url and error message both set: {state:?}"
    );
}

#[test]
fn empty_input_sets_message_without_request() {
    init_logging();
    let (state, effects) = submit_input(SubmissionState::new(), "");

    assert!(effects.is_empty());
    assert_eq!(state.error_message(), Some("Please enter a URL."));
    assert!(!state.is_submitting());
}

#[test]
fn whitespace_input_counts_as_empty() {
    init_logging();
    let (state, effects) = submit_input(SubmissionState::new(), "   \t ");

    assert!(effects.is_empty());
    assert_eq!(state.error_message(), Some("Please enter a URL."));
}

#[test]
fn malformed_input_sets_message_without_request() {
    init_logging();
    let (state, effects) = submit_input(SubmissionState::new(), "not-a-url");

    assert!(effects.is_empty());
    assert_eq!(
        state.error_message(),
        Some("Please enter a valid URL (e.g., https://example.com).")
    );
    assert!(!state.is_submitting());
}

#[test]
fn valid_input_starts_single_request() {
    init_logging();
    let (mut state, effects) = submit_input(SubmissionState::new(), "https://example.com/page");

    assert_eq!(
        effects,
        vec![Effect::Shorten(request("https://example.com/page"))]
    );
    assert!(state.is_submitting());
    assert_eq!(state.view().phase(), Phase::Submitting);
    assert_eq!(state.error_message(), None);
    assert!(state.consume_dirty());
}

#[test]
fn second_submit_while_in_flight_is_noop() {
    init_logging();
    let (mut state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    assert!(state.consume_dirty());
    let before = state.clone();

    let (mut state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state, before);
    assert!(!state.consume_dirty());

    let (state, effects) = update(state, Msg::KeyPressed(Key::Enter));
    assert!(effects.is_empty());
    assert_eq!(state, before);
}

#[test]
fn success_clears_input_and_records_short_url() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/abc123")),
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.long_url_input, "");
    assert_eq!(view.short_url.as_deref(), Some("https://tiny.ly/abc123"));
    assert_eq!(view.submitted_url.as_deref(), Some("https://example.com/page"));
    assert_eq!(view.error_message, None);
    assert!(!view.is_submitting);
    assert_eq!(view.phase(), Phase::Succeeded);
}

#[test]
fn rejection_uses_server_text() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, _effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::failure_with_detail(
            ErrorKind::ClientRejected,
            Some("Bad scheme".to_string()),
        )),
    );

    assert_eq!(state.error_message(), Some("Bad scheme"));
    assert_eq!(state.short_url(), None);
    assert!(!state.is_submitting());
    // Input survives a failure so the user can fix it.
    assert_eq!(state.long_url_input(), "https://example.com/page");
}

#[test]
fn rejection_without_text_falls_back() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, _effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::failure_with_detail(
            ErrorKind::ClientRejected,
            None,
        )),
    );

    assert_eq!(state.error_message(), Some("Invalid URL format."));
}

#[test]
fn every_failure_kind_settles_with_fixed_message() {
    init_logging();
    let cases = [
        (ErrorKind::ServerFault, "Server error. Please try again later."),
        (ErrorKind::Timeout, "Request timeout. Please try again."),
        (ErrorKind::Unknown, "An error occurred. Please try again."),
    ];

    for (kind, expected) in cases {
        let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
        let (state, _effects) = update(
            state,
            Msg::ShortenCompleted(ShortenResult::failure_with_detail(
                kind,
                Some("transport detail".to_string()),
            )),
        );
        assert_eq!(state.error_message(), Some(expected), "kind {kind}");
        assert!(!state.is_submitting());
        assert_eq!(state.view().phase(), Phase::Failed);
    }
}

#[test]
fn abandoned_request_unblocks_submit() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, _effects) = update(state, Msg::ShortenAbandoned);

    assert!(!state.is_submitting());
    assert_eq!(
        state.error_message(),
        Some("An error occurred. Please try again.")
    );

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert_eq!(effects.len(), 1);
    assert!(state.is_submitting());
}

#[test]
fn late_completion_without_request_is_ignored() {
    init_logging();
    let state = SubmissionState::new();
    let (mut next, effects) = update(
        state.clone(),
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/late")),
    );

    assert!(effects.is_empty());
    assert_eq!(next, state);
    assert!(!next.consume_dirty());
}

#[test]
fn empty_short_url_counts_as_unknown_failure() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, _effects) = update(state, Msg::ShortenCompleted(ShortenResult::success("")));

    assert_eq!(state.short_url(), None);
    assert_eq!(
        state.error_message(),
        Some("An error occurred. Please try again.")
    );
}

#[test]
fn editing_clears_error_but_keeps_short_url() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "nope");
    assert!(state.error_message().is_some());
    let (state, _effects) = update(state, Msg::InputChanged("nope!".to_string()));
    assert_eq!(state.error_message(), None);

    let (state, _effects) = submit_input(state, "https://example.com/page");
    let (state, _effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/abc123")),
    );
    let (state, _effects) = update(state, Msg::InputChanged("https://other".to_string()));
    assert_eq!(state.short_url(), Some("https://tiny.ly/abc123"));
}

#[test]
fn edits_during_flight_do_not_touch_submitting() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, effects) = update(state, Msg::InputChanged("https://next.example".to_string()));

    assert!(effects.is_empty());
    assert!(state.is_submitting());

    let (state, _effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/abc123")),
    );
    // The original request's URL is reported, not the edited text.
    assert_eq!(
        state.view().submitted_url.as_deref(),
        Some("https://example.com/page")
    );
}

#[test]
fn new_submission_clears_previous_result() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, _effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/abc123")),
    );

    let (state, effects) = submit_input(state, "https://example.com/second");
    assert_eq!(effects.len(), 1);
    assert_eq!(state.short_url(), None);
    assert_eq!(state.view().submitted_url, None);
}

#[test]
fn validation_error_after_success_hides_stale_result() {
    init_logging();
    let (state, _effects) = submit_input(SubmissionState::new(), "https://example.com/page");
    let (state, _effects) = update(
        state,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/abc123")),
    );

    let (state, effects) = update(state, Msg::SubmitClicked);
    assert!(effects.is_empty());
    assert_eq!(state.error_message(), Some("Please enter a URL."));
    assert_exclusive(&state);
}

#[test]
fn enter_key_submits_like_click() {
    init_logging();
    let (state, _) = update(
        SubmissionState::new(),
        Msg::InputChanged("https://example.com/page".to_string()),
    );
    let (state, effects) = update(state, Msg::KeyPressed(Key::Enter));

    assert_eq!(
        effects,
        vec![Effect::Shorten(request("https://example.com/page"))]
    );
    assert!(state.is_submitting());
}

#[test]
fn short_url_and_error_never_coexist() {
    init_logging();
    let msgs = vec![
        Msg::InputChanged("https://example.com/page".to_string()),
        Msg::SubmitClicked,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/abc123")),
        Msg::CopyClicked,
        Msg::CopyCompleted(Ok(())),
        Msg::SubmitClicked,
        Msg::InputChanged("bad".to_string()),
        Msg::SubmitClicked,
        Msg::InputChanged("https://example.com/again".to_string()),
        Msg::KeyPressed(Key::Enter),
        Msg::ShortenCompleted(ShortenResult::failure(ErrorKind::ServerFault)),
        Msg::InputChanged("https://example.com/again".to_string()),
        Msg::SubmitClicked,
        Msg::ShortenCompleted(ShortenResult::success("https://tiny.ly/xyz")),
    ];

    let mut state = SubmissionState::new();
    for msg in msgs {
        let (next, _effects) = update(state, msg);
        assert_exclusive(&next);
        state = next;
    }
    assert_eq!(state.short_url(), Some("https://tiny.ly/xyz"));
}

#[test]
fn view_mirrors_submit_guard() {
    init_logging();
    let view = SubmissionState::new().view();
    assert!(!view.can_submit());
    assert_eq!(view.submit_label(), "Shorten");
    assert_eq!(view.phase(), Phase::Idle);

    let (state, _) = update(
        SubmissionState::new(),
        Msg::InputChanged("  ".to_string()),
    );
    assert!(!state.view().can_submit());

    let (state, _) = submit_input(state, "https://example.com/page");
    let view = state.view();
    assert!(!view.can_submit());
    assert_eq!(view.submit_label(), "Processing...");
}
