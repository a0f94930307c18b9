//! Application input events.
//!
//! [`AppEvent`] is everything that can change App state. Events come from two
//! concurrent sources, the terminal and the network receive task, but are
//! applied one at a time by the runtime that owns the App.

use ircc_proto::{Message, ParseError};

use crate::KeyInput;

/// Events processed by the App state machine.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Parsed line from the server.
    Message(Message),

    /// Line from the server that could not be parsed.
    Malformed {
        /// The framed line.
        line: String,
        /// Why parsing failed.
        error: ParseError,
    },

    /// Transport closed or failed.
    ConnectionLost {
        /// Error description.
        reason: String,
    },
}
