//! Info pane
//!
//! Server lines, titled with the current channel and topic.

use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, List},
};

use crate::App;

/// Render the info pane.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();
    let title = format!(" {} | {} ", session.channel_or_sentinel(), session.topic_or_placeholder());

    let block = Block::default().borders(Borders::ALL).title(title);
    let list = List::new(super::buffer_items(app.info(), area)).block(block);

    frame.render_widget(list, area);
}
