//! Field rendering utilities for the signup form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field box.
///
/// An active field gets a cyan border and a cursor; a field with a
/// validation error gets a red border regardless of focus.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let border_color = if has_error {
        Color::Red
    } else if is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let is_select = matches!(field.value, FieldValue::Select { .. });

    let content = if display_value.is_empty() {
        let hint = field.placeholder.as_deref().unwrap_or("");
        Paragraph::new(Line::from(vec![
            Span::styled(hint.to_string(), Style::default().fg(Color::DarkGray)),
            cursor_span(is_active && !is_select),
        ]))
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            cursor_span(is_active && !is_select),
        ]))
    };

    let label = if field.required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let block = Block::default()
        .title(label)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

fn cursor_span(show: bool) -> Span<'static> {
    let cursor = if show { "▌" } else { "" };
    Span::styled(cursor, Style::default().fg(Color::Cyan))
}
