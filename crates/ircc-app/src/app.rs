//! Application state machine.
//!
//! The [`App`] owns every piece of mutable client state: session identity,
//! the pane buffers, the roster and the edit line. It consumes
//! [`AppEvent`]s and produces [`AppAction`]s for the runtime to execute, and
//! never performs I/O itself.
//!
//! # Invariants
//!
//! - Single writer: the App is only mutated through [`App::handle`] (and
//!   [`App::register`]) by the one task that owns it.
//! - Pane text is wrapped at the current [`PaneLayout`] width when appended.

use ircc_proto::{Outbound, numeric::NOT_ON_CHANNEL_TEXT};

use crate::{
    AppAction, AppEvent, Clock, DisplayBuffer, InputState, KeyInput, LineKind, PaneLayout, Roster,
    SessionState, clock,
    commands::{self, Command},
    dispatch,
};

/// Warning shown when chat text is entered outside a channel.
pub const JOIN_FIRST_TEXT: &str = "Join a channel to start chatting";

/// Static client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Server address (host:port), for display.
    pub server_addr: String,
    /// Initial nickname.
    pub nickname: String,
    /// Login name sent with USER.
    pub username: String,
    /// Real name sent with USER.
    pub realname: String,
    /// Show the debug pane.
    pub debug: bool,
}

/// Application state machine.
#[derive(Debug, Clone)]
pub struct App {
    pub(crate) config: AppConfig,
    pub(crate) session: SessionState,
    pub(crate) messages: DisplayBuffer,
    pub(crate) info: DisplayBuffer,
    pub(crate) debug: Option<DisplayBuffer>,
    pub(crate) roster: Roster,
    input: InputState,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    layout: PaneLayout,
    clock: Clock,
}

impl App {
    /// Create an App for an unregistered session.
    pub fn new(config: AppConfig) -> Self {
        Self::with_clock(config, clock::system_clock)
    }

    /// Create an App that dates chat lines with `clock`.
    pub fn with_clock(config: AppConfig, clock: Clock) -> Self {
        let terminal_size = (80, 24);
        Self {
            session: SessionState::new(config.nickname.clone()),
            messages: DisplayBuffer::new(),
            info: DisplayBuffer::new(),
            debug: config.debug.then(DisplayBuffer::new),
            roster: Roster::new(),
            input: InputState::new(),
            terminal_size,
            layout: PaneLayout::for_terminal(terminal_size.0, terminal_size.1, config.debug),
            clock,
            config,
        }
    }

    /// Registration commands to send once connected.
    pub fn register(&mut self) -> Vec<AppAction> {
        self.print_info(&format!("Connected to {}", self.config.server_addr), LineKind::Server);
        vec![
            AppAction::Send(Outbound::Nick(self.session.nickname.clone())),
            AppAction::Send(Outbound::User {
                username: self.config.username.clone(),
                realname: self.config.realname.clone(),
            }),
            AppAction::Render,
        ]
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                self.layout = PaneLayout::for_terminal(cols, rows, self.config.debug);
                vec![AppAction::Render]
            },
            AppEvent::Message(message) => dispatch::apply(self, message),
            AppEvent::Malformed { line, error } => dispatch::malformed(self, &line, &error),
            AppEvent::ConnectionLost { reason } => dispatch::connection_lost(self, reason),
        }
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let page = usize::from(self.layout.messages.height);
        match key {
            KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Enter => self.submit(),
            KeyInput::Up => {
                self.messages.scroll_up(1, page);
                vec![AppAction::Render]
            },
            KeyInput::Down => {
                self.messages.scroll_down(1);
                vec![AppAction::Render]
            },
            KeyInput::PageUp => {
                self.messages.scroll_up(page, page);
                vec![AppAction::Render]
            },
            KeyInput::PageDown => {
                self.messages.scroll_down(page);
                vec![AppAction::Render]
            },
            KeyInput::ShiftUp | KeyInput::ShiftDown => {
                let (Some(debug), Some(size)) = (self.debug.as_mut(), self.layout.debug) else {
                    return vec![];
                };
                if key == KeyInput::ShiftUp {
                    debug.scroll_up(1, usize::from(size.height));
                } else {
                    debug.scroll_down(1);
                }
                vec![AppAction::Render]
            },
            key => {
                self.input.edit(key);
                vec![AppAction::Render]
            },
        }
    }

    /// Handle Enter: run a command or send chat text.
    fn submit(&mut self) -> Vec<AppAction> {
        let text = self.input.take();
        if text.trim().is_empty() {
            return vec![AppAction::Render];
        }

        match commands::parse(&text) {
            Command::Nick { nickname } => {
                // Before registration the server does not echo NICK back.
                if !self.session.is_registered() {
                    self.session.nickname.clone_from(&nickname);
                }
                vec![AppAction::Send(Outbound::Nick(nickname)), AppAction::Render]
            },
            Command::Join { channel } => {
                vec![AppAction::Send(Outbound::Join(channel)), AppAction::Render]
            },
            Command::Part { reason } => match self.session.channel.clone() {
                Some(channel) => {
                    vec![AppAction::Send(Outbound::Part { channel, reason }), AppAction::Render]
                },
                None => self.warn(NOT_ON_CHANNEL_TEXT),
            },
            Command::Topic { topic } => match self.session.channel.clone() {
                Some(channel) => {
                    vec![AppAction::Send(Outbound::Topic { channel, topic }), AppAction::Render]
                },
                None => self.warn(NOT_ON_CHANNEL_TEXT),
            },
            Command::Msg { target, text } => {
                let echo = format!("{} -> {target}: {text}", self.session.nickname);
                self.print_chat(&echo, LineKind::Generic);
                vec![AppAction::Send(Outbound::Privmsg { target, text }), AppAction::Render]
            },
            Command::Quit { message } => {
                vec![AppAction::Send(Outbound::Quit(message)), AppAction::Quit]
            },
            Command::Message { content } => match self.session.channel.clone() {
                Some(channel) => {
                    let echo = format!("{} {content}", self.session.nickname);
                    self.print_chat(&echo, LineKind::Generic);
                    vec![
                        AppAction::Send(Outbound::Privmsg { target: channel, text: content }),
                        AppAction::Render,
                    ]
                },
                None => self.warn(JOIN_FIRST_TEXT),
            },
            Command::Unknown { input } => {
                let name = input.split_whitespace().next().unwrap_or(input.as_str()).to_owned();
                self.warn(&format!("Unknown command: {name}"))
            },
            Command::InvalidArgs { usage, .. } => self.warn(usage),
        }
    }

    fn warn(&mut self, text: &str) -> Vec<AppAction> {
        self.print_message(text, LineKind::Warn);
        vec![AppAction::Render]
    }

    /// Append to the message pane.
    pub(crate) fn print_message(&mut self, text: &str, kind: LineKind) {
        self.messages.append(text, usize::from(self.layout.messages.width), kind);
    }

    /// Append to the message pane behind a date header.
    pub(crate) fn print_chat(&mut self, text: &str, kind: LineKind) {
        let header = clock::header((self.clock)());
        self.print_message(&format!("{header} {text}"), kind);
    }

    /// Append to the info pane.
    pub(crate) fn print_info(&mut self, text: &str, kind: LineKind) {
        self.info.append(text, usize::from(self.layout.info.width), kind);
    }

    /// Append to the debug pane, if enabled.
    pub(crate) fn print_debug(&mut self, text: &str) {
        if let (Some(debug), Some(size)) = (self.debug.as_mut(), self.layout.debug) {
            debug.append(text, usize::from(size.width), LineKind::Debug);
        }
    }

    /// Client configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Session identity and connection phase.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Message pane.
    pub fn messages(&self) -> &DisplayBuffer {
        &self.messages
    }

    /// Info pane.
    pub fn info(&self) -> &DisplayBuffer {
        &self.info
    }

    /// Debug pane. `None` unless debug output is enabled.
    pub fn debug(&self) -> Option<&DisplayBuffer> {
        self.debug.as_ref()
    }

    /// Users in the current channel.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Edit line.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Current pane geometry.
    pub fn layout(&self) -> &PaneLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> AppConfig {
        AppConfig {
            server_addr: "irc.test:6667".into(),
            nickname: "alice".into(),
            username: "cs3357".into(),
            realname: "Alice".into(),
            debug: false,
        }
    }

    fn fixed_date() -> chrono::NaiveDate {
        chrono::NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    fn app() -> App {
        App::with_clock(config(), fixed_date)
    }

    fn type_line(app: &mut App, text: &str) -> Vec<AppAction> {
        for c in text.chars() {
            app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
        app.handle(AppEvent::Key(KeyInput::Enter))
    }

    fn last_message(app: &App) -> Option<(&str, LineKind)> {
        app.messages().last().map(|l| (l.text.as_str(), l.kind))
    }

    #[test]
    fn register_sends_nick_then_user() {
        let mut app = app();
        let actions = app.register();

        assert_eq!(actions, vec![
            AppAction::Send(Outbound::Nick("alice".into())),
            AppAction::Send(Outbound::User { username: "cs3357".into(), realname: "Alice".into() }),
            AppAction::Render,
        ]);
    }

    #[test]
    fn chat_without_channel_warns() {
        let mut app = app();
        let actions = type_line(&mut app, "hello");

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(last_message(&app), Some((JOIN_FIRST_TEXT, LineKind::Warn)));
    }

    #[test]
    fn chat_in_channel_sends_and_echoes() {
        let mut app = app();
        app.session.enter_channel("#rust");

        let actions = type_line(&mut app, "hello");

        assert_eq!(actions, vec![
            AppAction::Send(Outbound::Privmsg { target: "#rust".into(), text: "hello".into() }),
            AppAction::Render,
        ]);
        assert_eq!(last_message(&app), Some(("[2024-01-15] alice hello", LineKind::Generic)));
        assert_eq!(app.input().buffer(), "");
    }

    #[test]
    fn nick_before_registration_updates_locally() {
        let mut app = app();
        type_line(&mut app, "/nick bob");
        assert_eq!(app.session().nickname, "bob");

        let mut app = self::app();
        app.session.connection = crate::ConnectionState::Registered;
        let actions = type_line(&mut app, "/nick bob");
        assert_eq!(app.session().nickname, "alice");
        assert_eq!(actions[0], AppAction::Send(Outbound::Nick("bob".into())));
    }

    #[test]
    fn part_outside_channel_warns() {
        let mut app = app();
        let actions = type_line(&mut app, "/part");

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(last_message(&app).map(|(_, k)| k), Some(LineKind::Warn));
    }

    #[test]
    fn quit_sends_then_quits() {
        let mut app = app();
        let actions = type_line(&mut app, "/quit bye");

        assert_eq!(actions, vec![
            AppAction::Send(Outbound::Quit(Some("bye".into()))),
            AppAction::Quit
        ]);
    }

    #[test]
    fn unknown_command_warns_with_name() {
        let mut app = app();
        type_line(&mut app, "/whois bob");

        assert_eq!(last_message(&app), Some(("Unknown command: /whois", LineKind::Warn)));
    }

    #[test]
    fn esc_quits() {
        let mut app = app();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Quit]);
    }

    #[test]
    fn resize_rewraps_new_lines_only() {
        let mut app = app();
        app.handle(AppEvent::Resize(30, 24));

        // 30 columns minus roster and borders leaves 8 text columns.
        app.print_message("abcdefghij", LineKind::Generic);
        assert_eq!(app.messages().len(), 2);
    }

    #[test]
    fn arrow_keys_scroll_messages() {
        let mut app = app();
        for i in 0..50 {
            app.print_message(&i.to_string(), LineKind::Generic);
        }

        app.handle(AppEvent::Key(KeyInput::Up));
        assert_eq!(app.messages().scroll_back(), 1);
        app.handle(AppEvent::Key(KeyInput::PageUp));
        assert_eq!(app.messages().scroll_back(), 1 + usize::from(app.layout().messages.height));
        app.handle(AppEvent::Key(KeyInput::PageDown));
        app.handle(AppEvent::Key(KeyInput::Down));
        assert_eq!(app.messages().scroll_back(), 0);
    }

    #[test]
    fn private_message_echo_is_dated() {
        let mut app = app();
        type_line(&mut app, "/msg bob hi there");

        assert_eq!(
            last_message(&app),
            Some(("[2024-01-15] alice -> bob: hi there", LineKind::Generic))
        );
    }

    #[test]
    fn shift_arrows_scroll_debug_pane() {
        let mut app = App::with_clock(AppConfig { debug: true, ..config() }, fixed_date);
        for i in 0..50 {
            app.print_debug(&i.to_string());
        }

        app.handle(AppEvent::Key(KeyInput::ShiftUp));
        app.handle(AppEvent::Key(KeyInput::ShiftUp));
        assert_eq!(app.debug().unwrap().scroll_back(), 2);
        assert_eq!(app.messages().scroll_back(), 0);

        assert_eq!(app.handle(AppEvent::Key(KeyInput::ShiftDown)), vec![AppAction::Render]);
        assert_eq!(app.debug().unwrap().scroll_back(), 1);
    }

    #[test]
    fn shift_arrows_without_debug_pane_do_nothing() {
        let mut app = app();
        assert!(app.handle(AppEvent::Key(KeyInput::ShiftUp)).is_empty());
    }
}
