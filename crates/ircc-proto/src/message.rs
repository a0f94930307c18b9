//! Parsed protocol lines.
//!
//! A server line has the shape
//!
//! ```text
//! [:<sender>[!user@host] ]<command-or-numeric> [params...] [:<trailing>]
//! ```
//!
//! [`Message::parse`] classifies one framed line. Numeric replies are tested
//! before command verbs: a three-digit token after the first space is always a
//! numeric reply.
//!
//! # Bounds
//!
//! Parsing works on `&str` views with `split_once`/`strip_prefix`; no index is
//! ever computed past the end of the line, so truncated input yields a
//! [`ParseError`] instead of a garbage read.

use crate::errors::ParseError;

/// Command verbs the client understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nickname change.
    Nick,
    /// Channel join.
    Join,
    /// Channel part.
    Part,
    /// Channel topic change.
    Topic,
    /// Chat message.
    Privmsg,
    /// User disconnect.
    Quit,
    /// Server keepalive check.
    Ping,
    /// Fatal server error; the connection is closing.
    Error,
    /// Any other verb, kept verbatim.
    Other(String),
}

impl Command {
    /// Match a verb exactly (case-sensitive).
    pub fn from_verb(verb: &str) -> Self {
        match verb {
            "NICK" => Self::Nick,
            "JOIN" => Self::Join,
            "PART" => Self::Part,
            "TOPIC" => Self::Topic,
            "PRIVMSG" => Self::Privmsg,
            "QUIT" => Self::Quit,
            "PING" => Self::Ping,
            "ERROR" => Self::Error,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Wire spelling of the verb.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Nick => "NICK",
            Self::Join => "JOIN",
            Self::Part => "PART",
            Self::Topic => "TOPIC",
            Self::Privmsg => "PRIVMSG",
            Self::Quit => "QUIT",
            Self::Ping => "PING",
            Self::Error => "ERROR",
            Self::Other(verb) => verb,
        }
    }
}

/// Whether a line carries a numeric reply or a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageKind {
    /// Three-digit server reply code.
    Numeric(u16),
    /// Command verb.
    Command(Command),
}

/// One parsed protocol line.
///
/// Created per framed line and consumed by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Nickname (or server name) from the `:` prefix. `None` without prefix.
    pub sender: Option<String>,
    /// Numeric reply or command verb.
    pub kind: MessageKind,
    /// Middle parameters between the verb and the trailing parameter.
    pub params: Vec<String>,
    /// Text after the trailing `:` delimiter.
    ///
    /// When the line has no trailing colon the last middle parameter stands in
    /// for it, e.g. `JOIN #chan`.
    pub trailing: String,
    /// The framed line as received.
    pub raw: String,
}

impl Message {
    /// Parse one framed line (terminator already stripped).
    ///
    /// # Errors
    ///
    /// - [`ParseError::Empty`] for an empty line
    /// - [`ParseError::NoSpace`] if no token can follow the first one
    /// - [`ParseError::EmptyPrefix`] for a bare `:` prefix
    /// - [`ParseError::MissingVerb`] if nothing follows the first space
    /// - [`ParseError::MissingTrailing`] if there is neither a trailing
    ///   parameter nor a middle parameter to stand in for it
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        if line.is_empty() {
            return Err(ParseError::Empty);
        }

        // Server-originated PING/ERROR lines carry no prefix.
        if line.starts_with("PING") {
            return Ok(Self::unprefixed(Command::Ping, line));
        }
        if line.starts_with("ERROR") {
            return Ok(Self::unprefixed(Command::Error, line));
        }

        let (first, rest) = line.split_once(' ').ok_or(ParseError::NoSpace)?;

        let sender = if first.starts_with(':') {
            Some(parse_sender(first).ok_or(ParseError::EmptyPrefix)?.to_owned())
        } else {
            None
        };

        let rest = rest.trim_start_matches(' ');
        let (token, after) = rest.split_once(' ').unwrap_or((rest, ""));
        if token.is_empty() {
            return Err(ParseError::MissingVerb);
        }

        let kind = match parse_numeric(token) {
            Some(code) => MessageKind::Numeric(code),
            None => MessageKind::Command(Command::from_verb(token)),
        };

        let (middle, trailing) = split_trailing(after);
        let params: Vec<String> =
            middle.split(' ').filter(|p| !p.is_empty()).map(str::to_owned).collect();

        let trailing = match trailing {
            Some(text) => text.to_owned(),
            None => params.last().cloned().ok_or(ParseError::MissingTrailing)?,
        };

        Ok(Self { sender, kind, params, trailing, raw: line.to_owned() })
    }

    /// Numeric reply code. `None` for commands.
    pub fn numeric_code(&self) -> Option<u16> {
        match self.kind {
            MessageKind::Numeric(code) => Some(code),
            MessageKind::Command(_) => None,
        }
    }

    /// Command verb. `None` for numeric replies.
    pub fn command(&self) -> Option<&Command> {
        match &self.kind {
            MessageKind::Numeric(_) => None,
            MessageKind::Command(command) => Some(command),
        }
    }

    /// Sender, or the empty string if the line had no prefix.
    pub fn sender_or_empty(&self) -> &str {
        self.sender.as_deref().unwrap_or_default()
    }

    fn unprefixed(command: Command, line: &str) -> Self {
        let trailing = line.split_once(':').map(|(_, text)| text).unwrap_or_default();
        Self {
            sender: None,
            kind: MessageKind::Command(command),
            params: Vec::new(),
            trailing: trailing.to_owned(),
            raw: line.to_owned(),
        }
    }
}

/// Extract the sender identity from a line with a `:` prefix.
///
/// Returns the text between the leading `:` and the first `!`; for prefixes
/// without `!` (server names) the whole prefix token is returned. `None` if
/// the line has no prefix or the identity is empty.
///
/// ```
/// use ircc_proto::parse_sender;
///
/// assert_eq!(parse_sender(":alice!user@host NICK :bob"), Some("alice"));
/// assert_eq!(parse_sender(":irc.example.net 001 alice :hi"), Some("irc.example.net"));
/// assert_eq!(parse_sender("PING :x"), None);
/// ```
pub fn parse_sender(line: &str) -> Option<&str> {
    let prefixed = line.strip_prefix(':')?;
    let prefix = prefixed.split_once(' ').map_or(prefixed, |(prefix, _)| prefix);
    let sender = prefix.split_once('!').map_or(prefix, |(nick, _)| nick);
    (!sender.is_empty()).then_some(sender)
}

/// Exactly three ASCII digits.
fn parse_numeric(token: &str) -> Option<u16> {
    if token.len() == 3 && token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}

/// Split parameters into the middle part and the trailing parameter.
fn split_trailing(params: &str) -> (&str, Option<&str>) {
    if let Some(trailing) = params.strip_prefix(':') {
        return ("", Some(trailing));
    }
    match params.split_once(" :") {
        Some((middle, trailing)) => (middle, Some(trailing)),
        None => (params, None),
    }
}
