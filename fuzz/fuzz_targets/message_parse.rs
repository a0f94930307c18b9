//! Fuzz target for server line parsing
//!
//! # Invariants
//!
//! - `Message::parse` returns `Ok` or a structured `ParseError`, never panics
//! - A parsed line keeps its input verbatim in `raw`
//! - A numeric reply code is always below 1000
//! - The sender never contains `!` or a space

#![no_main]

use ircc_proto::{Message, parse_sender};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let line = String::from_utf8_lossy(data);

    let _ = parse_sender(&line);

    if let Ok(msg) = Message::parse(&line) {
        assert_eq!(msg.raw, line);
        if let Some(code) = msg.numeric_code() {
            assert!(code < 1000);
        }
        if let Some(sender) = &msg.sender {
            assert!(!sender.contains('!'));
            assert!(!sender.contains(' '));
        }
    }
});
