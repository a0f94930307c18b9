//! Fuzz target for the session state machine
//!
//! Drives an App with arbitrary server lines and operator keys.
//!
//! # Invariants
//!
//! - Dispatch never panics, whatever the server sends
//! - Pane buffers never exceed their capacity
//! - Roster names stay unique
//! - At most one `Fatal` action is ever produced

#![no_main]

use arbitrary::Arbitrary;
use ircc_app::{App, AppAction, AppConfig, AppEvent, KeyInput};
use ircc_proto::Message;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Step {
    Line(String),
    Key(char),
    Enter,
    Backspace,
    ScrollUp,
    Resize(u8, u8),
}

fuzz_target!(|steps: Vec<Step>| {
    let mut app = App::new(AppConfig {
        server_addr: "fuzz:6667".into(),
        nickname: "fuzz".into(),
        username: "fuzz".into(),
        realname: "fuzz".into(),
        debug: true,
    });

    let mut fatal = 0;
    for step in steps {
        let event = match step {
            Step::Line(line) => match Message::parse(&line) {
                Ok(msg) => AppEvent::Message(msg),
                Err(error) => AppEvent::Malformed { line, error },
            },
            Step::Key(c) => AppEvent::Key(KeyInput::Char(c)),
            Step::Enter => AppEvent::Key(KeyInput::Enter),
            Step::Backspace => AppEvent::Key(KeyInput::Backspace),
            Step::ScrollUp => AppEvent::Key(KeyInput::PageUp),
            Step::Resize(cols, rows) => AppEvent::Resize(u16::from(cols), u16::from(rows)),
        };

        let actions = app.handle(event);
        fatal += actions.iter().filter(|a| matches!(a, AppAction::Fatal { .. })).count();

        assert!(app.messages().len() <= app.messages().capacity());
        assert!(app.info().len() <= app.info().capacity());
    }

    assert!(fatal <= 1);

    let users = app.roster().users();
    for (i, user) in users.iter().enumerate() {
        assert!(users[i + 1..].iter().all(|u| u.name != user.name));
    }
});
