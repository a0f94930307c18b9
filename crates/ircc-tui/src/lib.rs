//! Terminal frontend for ircc
//!
//! A thin shell over [`ircc_app::Driver`]: a TCP [`transport`] with a
//! background receive task, a crossterm/ratatui [`terminal`] driver and the
//! pane [`ui`]. All session logic lives in the generic [`ircc_app::Runtime`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod config;
pub mod terminal;
pub mod transport;
pub mod ui;

pub use config::{Args, ClientConfig, ConfigError};
pub use ircc_app::{App, AppAction, AppEvent, Driver, Exit, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
pub use transport::{Connection, Inbound, TransportError};
