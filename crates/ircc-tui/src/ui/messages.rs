//! Message pane
//!
//! Chat, join/leave and warning lines, with the scroll position in the title
//! when the operator has scrolled back.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List},
};

use crate::App;

/// Render the message pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let scrolled = app.messages().scroll_back();
    let title = if scrolled > 0 {
        format!(" Messages [-{scrolled}] ")
    } else {
        " Messages ".to_owned()
    };

    let block = Block::default().borders(Borders::ALL).title(title);
    let list = List::new(super::buffer_items(app.messages(), area)).block(block);

    frame.render_widget(list, area);
}
