//! Client-to-server commands.
//!
//! [`Outbound`] is the typed form of everything the client sends. Encoding
//! appends CRLF, replaces embedded line breaks so operator input cannot
//! smuggle a second command onto the wire, and truncates to the protocol's
//! 512-byte line limit on a character boundary.

use std::fmt;

use bytes::BufMut;

/// Maximum line length on the wire, including CRLF.
pub const MAX_LINE_BYTES: usize = 512;

/// A command sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// `NICK <nickname>`
    Nick(String),
    /// `USER <username> 0 * :<realname>`
    User {
        /// Login name.
        username: String,
        /// Free-form real name.
        realname: String,
    },
    /// `JOIN <channel>`
    Join(String),
    /// `PART <channel> [:<reason>]`
    Part {
        /// Channel to leave.
        channel: String,
        /// Optional part message.
        reason: Option<String>,
    },
    /// `TOPIC <channel> [:<topic>]`; without a topic this queries it.
    Topic {
        /// Target channel.
        channel: String,
        /// New topic.
        topic: Option<String>,
    },
    /// `PRIVMSG <target> :<text>`
    Privmsg {
        /// Channel or nickname.
        target: String,
        /// Message body.
        text: String,
    },
    /// `QUIT [:<message>]`
    Quit(Option<String>),
}

impl Outbound {
    /// Encode as a CRLF-terminated wire line.
    pub fn encode(&self, dst: &mut impl BufMut) {
        let mut line = self.to_string().replace(['\r', '\n'], " ");

        let mut end = line.len().min(MAX_LINE_BYTES - 2);
        while !line.is_char_boundary(end) {
            end -= 1;
        }
        line.truncate(end);

        dst.put_slice(line.as_bytes());
        dst.put_slice(b"\r\n");
    }

    /// Encode into a fresh buffer.
    pub fn to_wire(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(64);
        self.encode(&mut buf);
        buf
    }
}

impl fmt::Display for Outbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nick(nick) => write!(f, "NICK {nick}"),
            Self::User { username, realname } => write!(f, "USER {username} 0 * :{realname}"),
            Self::Join(channel) => write!(f, "JOIN {channel}"),
            Self::Part { channel, reason: Some(reason) } => write!(f, "PART {channel} :{reason}"),
            Self::Part { channel, reason: None } => write!(f, "PART {channel}"),
            Self::Topic { channel, topic: Some(topic) } => write!(f, "TOPIC {channel} :{topic}"),
            Self::Topic { channel, topic: None } => write!(f, "TOPIC {channel}"),
            Self::Privmsg { target, text } => write!(f, "PRIVMSG {target} :{text}"),
            Self::Quit(Some(message)) => write!(f, "QUIT :{message}"),
            Self::Quit(None) => write!(f, "QUIT"),
        }
    }
}
