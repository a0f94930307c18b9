//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from the terminal
//! and the network. The terminal frontend implements it over crossterm and a
//! TCP transport; tests implement it over scripted event queues.

use std::future::Future;

use ircc_proto::Outbound;

use crate::{App, AppEvent};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations merge their input sources (keyboard, resize, server lines)
/// into a single stream of [`AppEvent`]s. The [`Runtime`](crate::Runtime) is
/// the only caller and applies events one at a time, so implementations never
/// touch App state concurrently.
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once every input source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if reading an input source fails.
    fn next_event(&mut self) -> impl Future<Output = Result<Option<AppEvent>, Self::Error>> + Send;

    /// Send a command to the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is closed or the write fails.
    fn send(&mut self, command: Outbound) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Render the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Stop background work and release resources.
    ///
    /// Called exactly once by the runtime, after the last event.
    fn shutdown(&mut self) -> impl Future<Output = ()> + Send;
}
