//! Line framing over a TCP byte stream.
//!
//! A single `read` can end anywhere: in the middle of a line, in the middle
//! of a CRLF pair, or even in the middle of a UTF-8 sequence. The framer
//! buffers every chunk and only hands out lines once their `\n` terminator
//! has arrived. Whatever follows the last terminator stays in the buffer and
//! is completed by the next chunk.
//!
//! # Invariants
//!
//! - Split Invariance: feeding a stream in any partition of chunks yields the
//!   same sequence of lines as feeding it in one piece.
//! - Bounded Residual: an unterminated fragment never grows past
//!   [`MAX_RESIDUAL`].
//! - Bounded Lines: a line with more than [`MAX_RESIDUAL`] bytes before its
//!   `\n` is never produced, whether it arrives in one chunk or many. It is
//!   dropped up to its terminator and counted once in
//!   [`LineFramer::overflowed`].

use bytes::{Buf, BytesMut};

/// Longest unterminated fragment kept between reads, and longest line
/// produced.
///
/// Sixteen times the 512-byte protocol line limit.
pub const MAX_RESIDUAL: usize = 8 * 1024;

const INITIAL_CAPACITY: usize = 4096;

/// Incremental line splitter with residual carry-over.
#[derive(Debug)]
pub struct LineFramer {
    buf: BytesMut,
    /// Dropping bytes of an oversized line until its terminator shows up.
    discarding: bool,
    overflowed: u64,
}

impl Default for LineFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineFramer {
    /// Create an empty framer.
    pub fn new() -> Self {
        Self { buf: BytesMut::with_capacity(INITIAL_CAPACITY), discarding: false, overflowed: 0 }
    }

    /// Append a chunk received from the transport.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Take the next complete line, if one is buffered.
    ///
    /// The `\n` terminator and a preceding `\r` are stripped. Empty lines are
    /// skipped. Invalid UTF-8 is replaced rather than rejected so one bad
    /// byte cannot hide the rest of a line.
    pub fn next_line(&mut self) -> Option<String> {
        loop {
            let Some(pos) = self.buf.iter().position(|&b| b == b'\n') else {
                self.enforce_residual_limit();
                return None;
            };

            let mut line = self.buf.split_to(pos + 1);
            line.truncate(pos);

            if self.discarding {
                // Tail of an oversized line; the next line starts clean.
                self.discarding = false;
                continue;
            }

            if pos > MAX_RESIDUAL {
                self.overflowed = self.overflowed.saturating_add(1);
                continue;
            }

            if line.last() == Some(&b'\r') {
                line.truncate(pos.saturating_sub(1));
            }

            if line.is_empty() {
                continue;
            }

            return Some(String::from_utf8_lossy(&line).into_owned());
        }
    }

    /// Drain all complete lines currently buffered.
    pub fn lines(&mut self) -> Lines<'_> {
        Lines { framer: self }
    }

    /// Bytes held back waiting for a terminator.
    pub fn residual(&self) -> &[u8] {
        &self.buf
    }

    /// Number of oversized fragments dropped so far.
    pub fn overflowed(&self) -> u64 {
        self.overflowed
    }

    fn enforce_residual_limit(&mut self) {
        if self.buf.len() <= MAX_RESIDUAL {
            return;
        }

        if !self.discarding {
            self.overflowed = self.overflowed.saturating_add(1);
            self.discarding = true;
        }
        let len = self.buf.len();
        self.buf.advance(len);
    }
}

/// Draining iterator over complete lines. See [`LineFramer::lines`].
#[derive(Debug)]
pub struct Lines<'a> {
    framer: &'a mut LineFramer,
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.framer.next_line()
    }
}
