//! Signup form screen rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::Form;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const FORM_WIDTH: u16 = 64;
const HEADER_HEIGHT: u16 = 5;
const FIELD_HEIGHT: u16 = 3;
const FIELD_COUNT: usize = 5;

/// Draw the signup form screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let column = centered_column(area, FORM_WIDTH);

    let name_error = app.errors.full_name.as_deref();
    let email_error = app.errors.email.as_deref();
    let failure = app.submission.error_message();

    // Header, five fields with optional inline error rows, button,
    // optional failure banner, key hints
    let mut constraints = vec![Constraint::Length(HEADER_HEIGHT)];
    constraints.push(Constraint::Length(FIELD_HEIGHT));
    if name_error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(FIELD_HEIGHT));
    if email_error.is_some() {
        constraints.push(Constraint::Length(1));
    }
    for _ in 2..FIELD_COUNT {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if failure.is_some() {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(column);
    let mut next = 0usize;
    let mut chunk = || {
        let area = chunks[next];
        next += 1;
        area
    };

    draw_header(frame, chunk());

    for index in 0..FIELD_COUNT {
        let Some(field) = app.form.get_field(index) else {
            continue;
        };
        let is_active = app.form.active_field_index == index;
        let error = match index {
            0 => name_error,
            1 => email_error,
            _ => None,
        };
        draw_field(frame, chunk(), field, is_active, error.is_some());
        if let Some(message) = error {
            draw_error_line(frame, chunk(), message);
        }
    }

    let submitting = app.submission.is_submitting();
    let label = if submitting {
        "⏳ Submitting..."
    } else {
        "Join Waitlist"
    };
    render_button(
        frame,
        chunk(),
        label,
        app.form.is_submit_row_active(),
        !submitting,
    );

    if let Some(message) = failure {
        draw_error_line(frame, chunk(), message);
    }

    draw_key_hints(frame, chunk());
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Join the Waitlist for Next-Gen OTP Delivery",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Reliable, secure authentication with budget-friendly pricing",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "that fits any business.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ))),
        area,
    );
}

fn draw_key_hints(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("←/→", Style::default().fg(Color::Cyan)),
        Span::raw(": choose option  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hints, area);
}

/// Center a fixed-width column within the available area
fn centered_column(area: Rect, width: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(1),
        ])
        .split(area);
    chunks[1]
}
