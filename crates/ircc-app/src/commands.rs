//! Operator command parsing.
//!
//! Lines starting with `/` are commands; anything else is chat text for the
//! current channel. Parsing is pure; the App decides what each command does
//! given the session state.

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/nick <nickname>`
    Nick {
        /// Requested nickname.
        nickname: String,
    },
    /// `/join <channel>`
    Join {
        /// Channel, `#`-prefixed if the operator left the prefix off.
        channel: String,
    },
    /// `/part [reason]`
    Part {
        /// Part message.
        reason: Option<String>,
    },
    /// `/topic [text]`; without text the topic is queried.
    Topic {
        /// New topic.
        topic: Option<String>,
    },
    /// `/msg <target> <text>`
    Msg {
        /// Channel or nickname.
        target: String,
        /// Message body.
        text: String,
    },
    /// `/quit [message]`
    Quit {
        /// Quit message.
        message: Option<String>,
    },
    /// Plain chat text.
    Message {
        /// Text to send.
        content: String,
    },
    /// Unrecognized `/command`.
    Unknown {
        /// The full input line.
        input: String,
    },
    /// Known command with missing or bad arguments.
    InvalidArgs {
        /// Command name without the slash.
        command: &'static str,
        /// Usage hint.
        usage: &'static str,
    },
}

/// Parse one submitted input line.
pub fn parse(input: &str) -> Command {
    let Some(body) = input.strip_prefix('/') else {
        return Command::Message { content: input.to_owned() };
    };

    let (name, args) = body.split_once(' ').unwrap_or((body, ""));
    let args = args.trim();
    let rest = (!args.is_empty()).then(|| args.to_owned());

    match name.to_ascii_lowercase().as_str() {
        "nick" => match single_word(args) {
            Some(nickname) => Command::Nick { nickname: nickname.to_owned() },
            None => Command::InvalidArgs { command: "nick", usage: "Usage: /nick <nickname>" },
        },
        "join" | "j" => match single_word(args) {
            Some(channel) => Command::Join { channel: channel_name(channel) },
            None => Command::InvalidArgs { command: "join", usage: "Usage: /join <#channel>" },
        },
        "part" | "leave" => Command::Part { reason: rest },
        "topic" => Command::Topic { topic: rest },
        "msg" => match args.split_once(' ') {
            Some((target, text)) if !text.trim().is_empty() => {
                Command::Msg { target: target.to_owned(), text: text.trim_start().to_owned() }
            },
            _ => Command::InvalidArgs { command: "msg", usage: "Usage: /msg <target> <text>" },
        },
        "quit" | "q" => Command::Quit { message: rest },
        _ => Command::Unknown { input: input.to_owned() },
    }
}

fn single_word(args: &str) -> Option<&str> {
    match args.split_whitespace().collect::<Vec<_>>().as_slice() {
        [word] => Some(*word),
        _ => None,
    }
}

fn channel_name(name: &str) -> String {
    if name.starts_with(['#', '&']) { name.to_owned() } else { format!("#{name}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_message() {
        assert_eq!(parse("hello there"), Command::Message { content: "hello there".into() });
    }

    #[test]
    fn join_adds_missing_channel_prefix() {
        assert_eq!(parse("/join #rust"), Command::Join { channel: "#rust".into() });
        assert_eq!(parse("/join rust"), Command::Join { channel: "#rust".into() });
        assert_eq!(parse("/j &local"), Command::Join { channel: "&local".into() });
    }

    #[test]
    fn missing_arguments() {
        assert!(matches!(parse("/join"), Command::InvalidArgs { command: "join", .. }));
        assert!(matches!(parse("/nick"), Command::InvalidArgs { command: "nick", .. }));
        assert!(matches!(parse("/nick a b"), Command::InvalidArgs { command: "nick", .. }));
        assert!(matches!(parse("/msg bob"), Command::InvalidArgs { command: "msg", .. }));
    }

    #[test]
    fn optional_arguments() {
        assert_eq!(parse("/part"), Command::Part { reason: None });
        assert_eq!(parse("/part see you"), Command::Part { reason: Some("see you".into()) });
        assert_eq!(parse("/topic"), Command::Topic { topic: None });
        assert_eq!(parse("/quit bye"), Command::Quit { message: Some("bye".into()) });
        assert_eq!(parse("/QUIT"), Command::Quit { message: None });
    }

    #[test]
    fn msg_keeps_text_spacing() {
        assert_eq!(
            parse("/msg bob hi  there"),
            Command::Msg { target: "bob".into(), text: "hi  there".into() }
        );
    }

    #[test]
    fn unknown_command() {
        assert_eq!(parse("/whois bob"), Command::Unknown { input: "/whois bob".into() });
    }
}
