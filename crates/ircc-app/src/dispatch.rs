//! Server message dispatch.
//!
//! The protocol state machine: each parsed [`Message`] becomes mutations of
//! the [`App`] (session state, pane buffers, roster) and a list of actions.
//!
//! # Invariants
//!
//! - Runs only on the task that owns the App.
//! - After the session is disconnected, server messages are ignored.
//! - A fatal `ERROR` or lost connection yields exactly one
//!   [`AppAction::Fatal`]; later events cannot produce another.

use ircc_proto::{
    Command, Message, MessageKind, ParseError,
    numeric::{self, RPL_WELCOME, Route},
};

use crate::{App, AppAction, ConnectionState, LineKind};

/// Warning shown for a server PING.
pub const IDLE_WARNING_TEXT: &str = "WARNING! You're idle. You are about to timeout!";

/// Sender shown for unknown numeric replies passed through unchanged.
pub const PASSTHROUGH_SENDER: &str = "server";

/// Apply one server message.
pub fn apply(app: &mut App, msg: Message) -> Vec<AppAction> {
    if app.session.is_disconnected() {
        tracing::debug!(raw = %msg.raw, "ignoring message after disconnect");
        return vec![];
    }

    let label = match &msg.kind {
        MessageKind::Numeric(code) => format!("{code:03}"),
        MessageKind::Command(command) => command.as_str().to_owned(),
    };
    tracing::debug!(kind = %label, raw = %msg.raw, "message received");
    app.print_debug(&format!("Message received ({label}) - {}", msg.raw));

    match &msg.kind {
        MessageKind::Numeric(code) => apply_numeric(app, *code, &msg),
        MessageKind::Command(command) => apply_command(app, command, &msg),
    }
}

fn apply_numeric(app: &mut App, code: u16, msg: &Message) -> Vec<AppAction> {
    match numeric::route(code) {
        Route::Server => {
            if code == RPL_WELCOME {
                app.session.connection = ConnectionState::Registered;
                if let Some(nick) = msg.params.first().filter(|n| n.as_str() != "*") {
                    app.session.nickname.clone_from(nick);
                }
                tracing::info!(nickname = %app.session.nickname, "registered");
            }
            app.print_info(&msg.trailing, LineKind::Server);
        },
        Route::Error => app.print_message(&msg.trailing, LineKind::Error),
        Route::Warn => app.print_message(&msg.trailing, LineKind::Warn),
        Route::FixedWarn(text) => app.print_message(text, LineKind::Warn),
        Route::Names => app.roster.replace_from_names(&msg.trailing),
        Route::Topic => app.session.topic = Some(msg.trailing.clone()),
        Route::Ignored => {},
        Route::Passthrough => passthrough(app, msg),
    }
    vec![AppAction::Render]
}

fn apply_command(app: &mut App, command: &Command, msg: &Message) -> Vec<AppAction> {
    let sender = msg.sender_or_empty();

    match command {
        Command::Nick => {
            let new = msg.trailing.as_str();
            app.print_chat(&format!("{sender} is now known as {new}"), LineKind::NickChange);
            app.roster.rename(sender, new);
            if app.session.is_self(sender) {
                app.session.nickname = new.to_owned();
            }
        },
        Command::Join => {
            let channel = msg.trailing.as_str();
            if app.session.is_self(sender) {
                app.session.enter_channel(channel);
                app.roster.clear();
                tracing::info!(channel, "joined");
            } else {
                app.print_chat(&format!("{sender} has joined {channel}"), LineKind::Enter);
                app.roster.add(sender);
            }
        },
        Command::Part => {
            if app.session.is_self(sender) {
                app.session.leave_channel();
                app.roster.clear();
            } else {
                app.roster.remove(sender);
            }
            app.print_chat(&format!("{sender} has left ({})", msg.trailing), LineKind::Exit);
        },
        Command::Topic => {
            let channel = msg
                .params
                .first()
                .map_or_else(|| app.session.channel_or_sentinel().to_owned(), Clone::clone);
            let text = format!("{channel} topic changed to: {}", msg.trailing);
            app.print_info(&text, LineKind::Server);
            app.session.topic = Some(msg.trailing.clone());
        },
        Command::Privmsg => {
            app.print_chat(&format!("{sender} {}", msg.trailing), LineKind::Generic);
        },
        Command::Ping => app.print_message(IDLE_WARNING_TEXT, LineKind::Warn),
        Command::Quit => {
            app.roster.remove(sender);
            app.print_chat(&format!("{sender} has quit ({})", msg.trailing), LineKind::Exit);
        },
        Command::Error => {
            let reason = if msg.trailing.is_empty() {
                "connection closed by server".to_owned()
            } else {
                msg.trailing.clone()
            };
            return disconnect(app, format!("Connection closed by server: {reason}"), reason);
        },
        // Unhandled verbs (NOTICE, MODE, ...) only show in the debug trace.
        Command::Other(_) => {},
    }
    vec![AppAction::Render]
}

fn passthrough(app: &mut App, msg: &Message) {
    app.print_chat(&format!("{PASSTHROUGH_SENDER} {}", msg.raw), LineKind::Generic);
}

/// Record a line the parser rejected.
pub fn malformed(app: &mut App, line: &str, error: &ParseError) -> Vec<AppAction> {
    tracing::warn!(%error, line, "malformed server line");
    if app.debug.is_none() {
        return vec![];
    }
    app.print_debug(&format!("Malformed line ({error}) - {line}"));
    vec![AppAction::Render]
}

/// The transport closed or failed.
pub fn connection_lost(app: &mut App, reason: String) -> Vec<AppAction> {
    if app.session.is_disconnected() {
        return vec![];
    }
    disconnect(app, format!("Connection lost: {reason}"), reason)
}

fn disconnect(app: &mut App, text: String, reason: String) -> Vec<AppAction> {
    tracing::warn!(%reason, "session ended");
    app.print_message(&text, LineKind::Error);
    app.session.connection = ConnectionState::Disconnected { reason: reason.clone() };
    vec![AppAction::Render, AppAction::Fatal { reason }]
}
