//! Application layer for ircc
//!
//! Pure state machines and a generic runtime sitting between the parsed
//! protocol stream and the screen. Every piece of mutable session state lives
//! in one [`App`] owned by one [`Runtime`]; network and terminal input reach
//! it only as [`AppEvent`]s, so there is exactly one writer.
//!
//! # Components
//!
//! - [`App`]: session state, panes and input handling
//! - [`DisplayBuffer`]: bounded, column-wrapped line store behind each pane
//! - [`Roster`]: users in the current channel
//! - [`dispatch`]: protocol state machine applying server messages to the App
//! - [`Driver`]: trait for platform-specific I/O
//! - [`Runtime`]: orchestration loop over a Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
pub mod buffer;
pub mod clock;
pub mod commands;
pub mod dispatch;
mod driver;
mod event;
mod input;
pub mod layout;
pub mod roster;
mod runtime;
mod state;

pub use action::AppAction;
pub use app::{App, AppConfig, JOIN_FIRST_TEXT};
pub use buffer::{DisplayBuffer, Line, LineKind};
pub use clock::Clock;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{InputState, KeyInput, MAX_INPUT_LEN};
pub use layout::PaneLayout;
pub use roster::{Roster, User, UserColor};
pub use runtime::{Exit, Runtime};
pub use state::{ConnectionState, NO_CHANNEL, NO_TOPIC, SessionState};
