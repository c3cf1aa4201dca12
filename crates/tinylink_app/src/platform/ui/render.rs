use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use tinylink_core::{SubmissionView, INPUT_PLACEHOLDER};

use super::constants::*;
use super::layout::screen_areas;

/// Draws one frame from the snapshot. Pure with respect to `view`.
pub fn render(frame: &mut Frame, view: &SubmissionView) {
    let areas = screen_areas(frame.area(), view);

    frame.render_widget(
        Paragraph::new(Line::from(TITLE.bold().fg(Color::Blue))).centered(),
        areas.title,
    );
    frame.render_widget(Paragraph::new(SUBTITLE).centered(), areas.subtitle);
    render_input(frame, areas.input, view);

    if let Some(message) = view.error_message.as_deref() {
        frame.render_widget(Paragraph::new(message).red().centered(), areas.error);
    }
    if let Some(short_url) = view.short_url.as_deref() {
        render_result(frame, areas.result, view, short_url);
    }

    frame.render_widget(
        Paragraph::new(KEY_HINTS).fg(Color::DarkGray).centered(),
        areas.footer,
    );
}

fn render_input(frame: &mut Frame, area: Rect, view: &SubmissionView) {
    let button_style = if view.can_submit() {
        Style::default().fg(Color::White).bg(Color::Blue)
    } else {
        Style::default().fg(Color::Gray)
    };
    let button = Span::styled(format!("[ {} ]", view.submit_label()), button_style);
    let block = Block::bordered()
        .title(INPUT_TITLE)
        .title(Line::from(button).right_aligned());
    let inner = block.inner(area);

    let text = if view.long_url_input.is_empty() {
        Line::from(INPUT_PLACEHOLDER.fg(Color::DarkGray))
    } else {
        Line::from(view.long_url_input.as_str())
    };

    // Keep the end of long input visible.
    let typed = u16::try_from(view.long_url_input.chars().count()).unwrap_or(u16::MAX);
    let visible = inner.width.saturating_sub(1);
    let scroll = typed.saturating_sub(visible);
    frame.render_widget(Paragraph::new(text).scroll((0, scroll)).block(block), area);

    if !view.is_submitting && inner.width > 0 && inner.height > 0 {
        let cursor_x = inner.x.saturating_add(typed.min(visible));
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

fn render_result(frame: &mut Frame, area: Rect, view: &SubmissionView, short_url: &str) {
    let copy_style = if view.is_copied {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    let lines = vec![
        Line::from(vec![
            ORIGINAL_URL_LABEL.bold(),
            Span::raw(view.submitted_url.as_deref().unwrap_or_default()),
        ]),
        Line::from(vec![
            Span::styled(
                short_url,
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            ),
            Span::raw("  "),
            Span::styled(format!("[ {} ]", view.copy_label()), copy_style),
        ]),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(RESULT_TITLE)),
        area,
    );
}
