//! Terminal driver.
//!
//! Implements [`Driver`] over crossterm for keyboard and resize events,
//! ratatui for rendering and a TCP [`Connection`] for the network. Terminal
//! input and server lines are merged into one event stream so the runtime
//! sees a single ordered sequence.

use std::{
    io::{self, Stdout, stdout},
    time::Duration,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ircc_app::{App, AppEvent, Driver, KeyInput};
use ircc_proto::Outbound;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::{sync::mpsc, time::Interval};

use crate::{
    transport::{Connection, Inbound, TransportError},
    ui,
};

/// Interval between [`AppEvent::Tick`]s.
pub const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport error.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Terminal driver implementing the [`Driver`] trait.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    events: EventStream,
    connection: Connection,
    inbox: mpsc::Receiver<Inbound>,
    inbox_open: bool,
    tick: Interval,
    restored: bool,
}

impl TerminalDriver {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be configured.
    pub fn new(connection: Connection, inbox: mpsc::Receiver<Inbound>) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            events: EventStream::new(),
            connection,
            inbox,
            inbox_open: true,
            tick: tokio::time::interval(TICK_INTERVAL),
            restored: false,
        })
    }

    /// Current terminal size (columns, rows).
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be queried.
    pub fn size(&self) -> Result<(u16, u16), TerminalError> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    /// Convert a crossterm key event to `KeyInput`.
    fn convert_key(key: KeyEvent) -> Option<KeyInput> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c' | 'd')).then_some(KeyInput::Esc);
        }
        if key.modifiers.contains(KeyModifiers::SHIFT) {
            match key.code {
                KeyCode::Up => return Some(KeyInput::ShiftUp),
                KeyCode::Down => return Some(KeyInput::ShiftDown),
                _ => {},
            }
        }
        match key.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::PageUp => Some(KeyInput::PageUp),
            KeyCode::PageDown => Some(KeyInput::PageDown),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    fn inbound_event(&mut self, inbound: Option<Inbound>) -> AppEvent {
        match inbound {
            Some(Inbound::Message(message)) => AppEvent::Message(message),
            Some(Inbound::Malformed { line, error }) => AppEvent::Malformed { line, error },
            Some(Inbound::Closed { reason }) => AppEvent::ConnectionLost { reason },
            None => {
                self.inbox_open = false;
                AppEvent::ConnectionLost { reason: "receive task stopped".into() }
            },
        }
    }

    fn restore_terminal(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn next_event(&mut self) -> Result<Option<AppEvent>, Self::Error> {
        loop {
            tokio::select! {
                biased;

                // Server lines
                inbound = self.inbox.recv(), if self.inbox_open => {
                    return Ok(Some(self.inbound_event(inbound)));
                }

                // Terminal events
                maybe_event = self.events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if let Some(input) = Self::convert_key(key) {
                                return Ok(Some(AppEvent::Key(input)));
                            }
                        },
                        Some(Ok(Event::Resize(cols, rows))) => {
                            return Ok(Some(AppEvent::Resize(cols, rows)));
                        },
                        Some(Ok(_)) => {},
                        Some(Err(e)) => return Err(TerminalError::Io(e)),
                        None => return Ok(None),
                    }
                }

                // Periodic tick
                _ = self.tick.tick() => return Ok(Some(AppEvent::Tick)),
            }
        }
    }

    async fn send(&mut self, command: Outbound) -> Result<(), Self::Error> {
        self.connection.send_line(&command).await?;
        Ok(())
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        self.terminal.draw(|frame| ui::render(frame, app))?;
        Ok(())
    }

    async fn shutdown(&mut self) {
        self.connection.shutdown().await;
        self.restore_terminal();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore_terminal();
    }
}
