//! IRC wire protocol for ircc
//!
//! Sans-IO protocol layer: turns a raw TCP byte stream into typed
//! [`Message`]s and typed [`Outbound`] commands into CRLF-terminated lines.
//! Nothing here touches a socket, so every piece can be driven from tests and
//! fuzzers with plain byte slices.
//!
//! # Components
//!
//! - [`LineFramer`]: splits chunks into lines, carrying partial lines across
//!   reads
//! - [`Message`]: one parsed protocol line (numeric reply or command)
//! - [`numeric`]: reply code tables and their dispatch routes
//! - [`Outbound`]: client-to-server command encoding

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod command;
pub mod errors;
pub mod framer;
pub mod message;
pub mod numeric;

pub use command::{MAX_LINE_BYTES, Outbound};
pub use errors::ParseError;
pub use framer::LineFramer;
pub use message::{Command, Message, MessageKind, parse_sender};
