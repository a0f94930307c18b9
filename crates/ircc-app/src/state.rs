//! Observable session state.
//!
//! [`SessionState`] is the client's view of its own identity on the server:
//! nickname, channel, topic and connection phase. It is owned by the
//! [`crate::App`] and only mutated on the runtime task, by the dispatcher for
//! server events and by input handling for local commands.

/// Displayed in place of the channel when none is joined.
pub const NO_CHANNEL: &str = "none";

/// Displayed in place of the topic when none is known.
pub const NO_TOPIC: &str = "No Current Topic";

/// Connection phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConnectionState {
    /// Registration (NICK/USER) sent, waiting for the welcome reply.
    Connecting,
    /// Welcome received; the server knows our nickname.
    Registered,
    /// Connection ended. No further server events are applied.
    Disconnected {
        /// Why the connection ended.
        reason: String,
    },
}

/// Local session identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Current nickname.
    pub nickname: String,
    /// Joined channel. `None` when not in a channel.
    pub channel: Option<String>,
    /// Topic of the joined channel. `None` if unknown.
    pub topic: Option<String>,
    /// Connection phase.
    pub connection: ConnectionState,
}

impl SessionState {
    /// Create a session that has not registered yet.
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            channel: None,
            topic: None,
            connection: ConnectionState::Connecting,
        }
    }

    /// Event was sent by this session.
    pub fn is_self(&self, sender: &str) -> bool {
        self.nickname == sender
    }

    /// Joined channel, or [`NO_CHANNEL`].
    pub fn channel_or_sentinel(&self) -> &str {
        self.channel.as_deref().unwrap_or(NO_CHANNEL)
    }

    /// Channel topic, or [`NO_TOPIC`].
    pub fn topic_or_placeholder(&self) -> &str {
        self.topic.as_deref().unwrap_or(NO_TOPIC)
    }

    /// Server has accepted our registration.
    pub fn is_registered(&self) -> bool {
        self.connection == ConnectionState::Registered
    }

    /// Connection has ended.
    pub fn is_disconnected(&self) -> bool {
        matches!(self.connection, ConnectionState::Disconnected { .. })
    }

    /// Switch to a newly joined channel, forgetting the old topic.
    pub fn enter_channel(&mut self, channel: impl Into<String>) {
        self.channel = Some(channel.into());
        self.topic = None;
    }

    /// Leave the current channel.
    pub fn leave_channel(&mut self) {
        self.channel = None;
        self.topic = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_when_unset() {
        let session = SessionState::new("alice");

        assert_eq!(session.channel_or_sentinel(), "none");
        assert_eq!(session.topic_or_placeholder(), "No Current Topic");
        assert!(!session.is_registered());
    }

    #[test]
    fn entering_a_channel_clears_topic() {
        let mut session = SessionState::new("alice");
        session.enter_channel("#a");
        session.topic = Some("old".into());

        session.enter_channel("#b");
        assert_eq!(session.channel.as_deref(), Some("#b"));
        assert_eq!(session.topic, None);

        session.leave_channel();
        assert_eq!(session.channel_or_sentinel(), NO_CHANNEL);
    }

    #[test]
    fn self_match_is_exact() {
        let session = SessionState::new("alice");
        assert!(session.is_self("alice"));
        assert!(!session.is_self("Alice"));
    }
}
