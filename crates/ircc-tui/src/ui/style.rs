//! Colors for line kinds and roster entries.

use ircc_app::{LineKind, UserColor};
use ratatui::style::{Color, Modifier, Style};

/// Roster palette, indexed by [`UserColor`].
const PALETTE: [Color; UserColor::PALETTE_SIZE as usize] =
    [Color::Cyan, Color::Green, Color::Magenta, Color::Yellow, Color::LightBlue, Color::LightRed];

/// Style for a display line.
pub fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Generic => Style::default(),
        LineKind::Enter => Style::default().fg(Color::Green),
        LineKind::Exit => Style::default().fg(Color::DarkGray),
        LineKind::Server => Style::default().fg(Color::Cyan),
        LineKind::Error => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        LineKind::Debug => Style::default().fg(Color::Gray),
        LineKind::Warn => Style::default().fg(Color::Yellow),
        LineKind::NickChange => Style::default().fg(Color::Magenta),
    }
}

/// Color for a roster entry.
pub fn user_color(color: UserColor) -> Color {
    PALETTE.get(usize::from(color.0)).copied().unwrap_or(Color::White)
}
