use ratatui::layout::{Constraint, Layout, Rect};
use tinylink_core::SubmissionView;

/// Screen regions, top to bottom. Optional regions are empty when unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub subtitle: Rect,
    pub input: Rect,
    pub error: Rect,
    pub result: Rect,
    pub footer: Rect,
}

pub fn screen_areas(area: Rect, view: &SubmissionView) -> ScreenAreas {
    let error_height = u16::from(view.error_message.is_some());
    let result_height = if view.short_url.is_some() { 4 } else { 0 };

    let [title, subtitle, _gap, input, error, result, _fill, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(error_height),
        Constraint::Length(result_height),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        title,
        subtitle,
        input,
        error,
        result,
        footer,
    }
}
