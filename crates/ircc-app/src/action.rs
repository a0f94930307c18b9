//! Application side-effects.
//!
//! [`AppAction`]s are instructions produced by the [`crate::App`] for the
//! runtime to execute against its driver.

use ircc_proto::Outbound;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Send a command to the server.
    Send(Outbound),

    /// Leave the application normally.
    Quit,

    /// Session ended unrecoverably; shut down and exit with failure.
    Fatal {
        /// What ended the session.
        reason: String,
    },
}
