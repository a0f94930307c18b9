//! Roster sidebar
//!
//! Users in the current channel, each in a stable color.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::style::user_color;
use crate::App;

/// Render the roster sidebar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let roster = app.roster();

    let items: Vec<ListItem> = roster
        .users()
        .iter()
        .map(|user| {
            let prefix = user.prefix.map(String::from).unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::raw(prefix),
                Span::styled(user.name.as_str(), Style::default().fg(user_color(user.color))),
            ]))
        })
        .collect();

    let title = format!(" Users ({}) ", roster.len());
    let block = Block::default().borders(Borders::ALL).title(title);

    frame.render_widget(List::new(items).block(block), area);
}
