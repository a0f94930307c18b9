//! UI rendering
//!
//! Rendering functions that project App state onto the terminal with ratatui
//! widgets. Rendering reads state only, so drawing twice without an
//! intervening event yields the same frame.

mod debug;
mod info;
mod input;
mod messages;
mod roster;
mod status;
pub mod style;

use ircc_app::{
    DisplayBuffer,
    layout::{
        BORDER, DEBUG_HEIGHT, INFO_HEIGHT, INPUT_HEIGHT, MESSAGES_MIN_HEIGHT, ROSTER_WIDTH,
        STATUS_HEIGHT,
    },
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::ListItem,
};

use crate::App;

/// Render the entire UI.
pub fn render(frame: &mut Frame, app: &App) {
    let debug = app.debug().is_some();

    let mut constraints = vec![Constraint::Min(MESSAGES_MIN_HEIGHT), Constraint::Length(INFO_HEIGHT)];
    if debug {
        constraints.push(Constraint::Length(DEBUG_HEIGHT));
    }
    constraints.extend([Constraint::Length(INPUT_HEIGHT), Constraint::Length(STATUS_HEIGHT)]);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let (main_area, info_area, debug_area, input_area, status_area) = match chunks.as_ref() {
        [main, info, debug, input, status] => (*main, *info, Some(*debug), *input, *status),
        [main, info, input, status] => (*main, *info, None, *input, *status),
        _ => return,
    };

    render_main_area(frame, app, main_area);
    info::render(frame, app, info_area);
    if let Some(area) = debug_area {
        debug::render(frame, app, area);
    }
    input::render(frame, app.input(), input_area);
    status::render(frame, app, status_area);
}

/// Render the main area (messages + roster sidebar).
fn render_main_area(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(ROSTER_WIDTH)])
        .split(area);

    let [messages_area, roster_area] = chunks.as_ref() else {
        return;
    };

    messages::render(frame, app, *messages_area);
    roster::render(frame, app, *roster_area);
}

/// Visible lines of a buffer inside a bordered pane.
fn buffer_items(buffer: &DisplayBuffer, area: Rect) -> Vec<ListItem<'_>> {
    let height = usize::from(area.height.saturating_sub(BORDER));
    buffer
        .viewport(height)
        .map(|line| ListItem::new(Line::styled(line.text.as_str(), style::line_style(line.kind))))
        .collect()
}
