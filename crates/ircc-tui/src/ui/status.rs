//! Status bar
//!
//! Displays connection phase, nickname and server.

use ircc_app::ConnectionState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

/// Render the status bar.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let session = app.session();

    let connection_status = match &session.connection {
        ConnectionState::Connecting => {
            Span::styled("Registering...", Style::default().fg(Color::Yellow))
        },
        ConnectionState::Registered => Span::styled(
            "Connected",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        ConnectionState::Disconnected { reason } => {
            Span::styled(format!("Disconnected: {reason}"), Style::default().fg(Color::Red))
        },
    };

    let details = format!(" | {} @ {}", session.nickname, app.config().server_addr);

    let status_line = Line::from(vec![
        Span::raw(" "),
        connection_status,
        Span::styled(details, Style::default().fg(Color::White)),
    ]);

    let paragraph =
        Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(paragraph, area);
}
