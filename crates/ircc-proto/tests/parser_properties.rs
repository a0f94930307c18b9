//! Property-based tests for message parsing.
//!
//! The parser must be total: any framed line either parses or yields a
//! `ParseError`, never a panic or an out-of-bounds read.

use ircc_proto::{Command, Message, MessageKind, parse_sender};
use proptest::prelude::*;

fn nickname() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_]{0,15}"
}

proptest! {
    #[test]
    fn prop_parse_is_total(line in "\\PC{0,200}") {
        let _ = Message::parse(&line);
    }

    #[test]
    fn prop_sender_is_text_before_bang(
        nick in nickname(),
        user in "[a-z]{1,8}",
        host in "[a-z.]{1,20}",
        body in "[ -~]{0,60}",
    ) {
        let line = format!(":{nick}!{user}@{host} PRIVMSG #chan :{body}");

        prop_assert_eq!(parse_sender(&line), Some(nick.as_str()));

        let msg = Message::parse(&line).unwrap();
        prop_assert_eq!(msg.sender.as_deref(), Some(nick.as_str()));
        prop_assert_eq!(msg.command(), Some(&Command::Privmsg));
        prop_assert_eq!(msg.trailing, body);
    }

    #[test]
    fn prop_three_digit_token_is_numeric(code in 0u16..1000, text in "[ -~]{0,40}") {
        let line = format!(":irc.example.net {code:03} alice :{text}");
        let msg = Message::parse(&line).unwrap();

        prop_assert_eq!(msg.kind, MessageKind::Numeric(code));
        prop_assert_eq!(msg.trailing, text);
    }
}
