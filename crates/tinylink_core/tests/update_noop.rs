use tinylink_core::{update, Key, Msg, SubmissionState};

#[test]
fn update_is_noop() {
    let state = SubmissionState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_and_other_keys_change_nothing() {
    let (state, _) = update(
        SubmissionState::new(),
        Msg::InputChanged("https://example.com".to_string()),
    );
    let mut state = state;
    assert!(state.consume_dirty());

    let (state, effects) = update(state, Msg::Tick);
    assert!(effects.is_empty());
    let (mut state, effects) = update(state, Msg::KeyPressed(Key::Other));
    assert!(effects.is_empty());
    assert!(!state.consume_dirty());
    assert_eq!(state.long_url_input(), "https://example.com");
}
