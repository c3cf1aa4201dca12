//! Translates terminal input into controller intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tinylink_core::{Key, SubmissionView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Replace the input text.
    Edit(String),
    /// Enter in the input box.
    KeyPressed(Key),
    /// The Shorten button. Ignored while the view disables it.
    ShortenClicked,
    CopyClicked,
    Quit,
    None,
}

pub fn translate_key(key: &KeyEvent, view: &SubmissionView) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if ctrl => Action::Quit,
        KeyCode::Char('s') if ctrl => {
            if view.can_submit() {
                Action::ShortenClicked
            } else {
                Action::None
            }
        }
        KeyCode::Char('y') if ctrl => {
            if view.can_copy() {
                Action::CopyClicked
            } else {
                Action::None
            }
        }
        KeyCode::Char('u') if ctrl => Action::Edit(String::new()),
        KeyCode::Enter => Action::KeyPressed(Key::Enter),
        KeyCode::Backspace => {
            let mut text = view.long_url_input.clone();
            match text.pop() {
                Some(_) => Action::Edit(text),
                None => Action::None,
            }
        }
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = view.long_url_input.clone();
            text.push(c);
            Action::Edit(text)
        }
        _ => Action::KeyPressed(Key::Other),
    }
}

/// Bracketed paste appends to the input; line breaks are dropped.
pub fn translate_paste(pasted: &str, view: &SubmissionView) -> Action {
    let cleaned: String = pasted.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    if cleaned.is_empty() {
        return Action::None;
    }
    Action::Edit(format!("{}{}", view.long_url_input, cleaned))
}
