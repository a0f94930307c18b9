//! Fuzz target for line framing across read boundaries
//!
//! # Strategy
//!
//! - Arbitrary byte stream, split at arbitrary cut points
//! - Chunks may end mid-line, mid-CRLF, or mid-UTF-8 sequence
//!
//! # Invariants
//!
//! - Feeding chunks yields exactly the lines of feeding the stream whole,
//!   oversized lines included
//! - No yielded line contains `\n`
//! - The retained residual never exceeds the overflow bound

#![no_main]

use arbitrary::Arbitrary;
use ircc_proto::{LineFramer, framer::MAX_RESIDUAL};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    stream: Vec<u8>,
    cuts: Vec<u16>,
}

fuzz_target!(|input: Input| {
    let mut whole = LineFramer::new();
    whole.push(&input.stream);
    let expected: Vec<String> = whole.lines().collect();

    let mut cuts: Vec<usize> =
        input.cuts.iter().map(|&c| usize::from(c) % (input.stream.len() + 1)).collect();
    cuts.sort_unstable();

    let mut chunked = LineFramer::new();
    let mut actual = Vec::new();
    let mut start = 0;
    for cut in cuts.into_iter().chain([input.stream.len()]) {
        chunked.push(&input.stream[start..cut]);
        actual.extend(chunked.lines());
        assert!(chunked.residual().len() <= MAX_RESIDUAL);
        start = cut;
    }

    for line in &actual {
        assert!(!line.contains('\n'));
    }

    assert_eq!(actual, expected);
    assert_eq!(chunked.overflowed(), whole.overflowed());
});
