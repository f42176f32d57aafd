//! UI module for rendering the TUI

mod components;
mod confirmation;
mod field_renderer;
mod form;

use crate::app::App;
use ratatui::Frame;

/// Main draw function.
///
/// The submission state picks exactly one of the two screens.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if app.submission.is_submitted() {
        confirmation::draw(frame, area);
    } else {
        form::draw(frame, area, app);
    }
}
