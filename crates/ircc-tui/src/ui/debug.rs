//! Debug pane
//!
//! Raw protocol trace, shown only with `--debug`.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List},
};

use crate::App;

/// Render the debug pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(buffer) = app.debug() else {
        return;
    };

    let scrolled = buffer.scroll_back();
    let title = if scrolled > 0 { format!(" Debug [-{scrolled}] ") } else { " Debug ".to_owned() };

    let block = Block::default().borders(Borders::ALL).title(title);
    let list = List::new(super::buffer_items(buffer, area)).block(block);

    frame.render_widget(list, area);
}
