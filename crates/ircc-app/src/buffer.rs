//! Line-wrapped display buffers.
//!
//! Every text pane is backed by a [`DisplayBuffer`]: a bounded store of
//! physical lines, each already cut to the pane's column width when it was
//! appended. Rendering never re-wraps; it only slices the visible window.
//!
//! # Invariants
//!
//! - Bounded: `len() <= capacity()`. Appending to a full buffer evicts the
//!   oldest line (ring behavior) and increments [`DisplayBuffer::evicted`].
//! - Line Length: every stored line holds at most [`MAX_LINE_LEN`] characters.
//! - Round Trip: the segments produced by one [`DisplayBuffer::append`]
//!   concatenate back to the appended text.

use std::collections::VecDeque;

/// Longest physical line, in characters.
pub const MAX_LINE_LEN: usize = 300;

/// Default number of lines kept per pane.
pub const DEFAULT_CAPACITY: usize = 10_000;

/// Category of a display line. Drives the color it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// Chat message or passthrough text.
    Generic,
    /// A user joined.
    Enter,
    /// A user left or quit.
    Exit,
    /// Server information.
    Server,
    /// Error reply or fatal condition.
    Error,
    /// Raw protocol trace.
    Debug,
    /// Warning to the operator.
    Warn,
    /// A user changed nickname.
    NickChange,
}

/// One physical display line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Category.
    pub kind: LineKind,
    /// Text, at most [`MAX_LINE_LEN`] characters.
    pub text: String,
}

/// Bounded store of wrapped lines with a scroll position.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    capacity: usize,
    lines: VecDeque<Line>,
    /// Lines between the bottom of the viewport and the newest line.
    /// Zero follows the tail.
    scroll_back: usize,
    evicted: u64,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayBuffer {
    /// Create a buffer holding [`DEFAULT_CAPACITY`] lines.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a buffer holding at most `capacity` lines (minimum one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            lines: VecDeque::with_capacity(capacity.min(1024)),
            scroll_back: 0,
            evicted: 0,
        }
    }

    /// Append `text` hard-wrapped at `width` columns.
    ///
    /// The width is clamped to `1..=MAX_LINE_LEN`. Empty text produces one
    /// empty line. Returns the number of physical lines appended.
    pub fn append(&mut self, text: &str, width: usize, kind: LineKind) -> usize {
        let width = width.clamp(1, MAX_LINE_LEN);

        if text.is_empty() {
            self.push(Line { kind, text: String::new() });
            return 1;
        }

        let mut produced = 0;
        let mut segment = String::with_capacity(width);
        let mut columns = 0;

        for c in text.chars() {
            segment.push(c);
            columns += 1;
            if columns == width {
                self.push(Line { kind, text: std::mem::take(&mut segment) });
                produced += 1;
                columns = 0;
            }
        }

        if !segment.is_empty() {
            self.push(Line { kind, text: segment });
            produced += 1;
        }

        produced
    }

    fn push(&mut self, line: Line) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
            self.evicted = self.evicted.saturating_add(1);
        }
        self.lines.push_back(line);

        // Keep a scrolled-back viewport anchored on the same lines.
        if self.scroll_back > 0 {
            self.scroll_back = self.scroll_back.saturating_add(1).min(self.lines.len());
        }
    }

    /// Lines visible in a viewport `height` rows tall, oldest first.
    ///
    /// The window ends `scroll_back` lines before the newest line and never
    /// scrolls past the oldest line.
    pub fn viewport(&self, height: usize) -> impl Iterator<Item = &Line> {
        let len = self.lines.len();
        let end = len.saturating_sub(self.scroll_back).max(height.min(len));
        let start = end.saturating_sub(height);
        self.lines.range(start..end)
    }

    /// Scroll toward older lines, stopping once the oldest line is at the
    /// top of a `height`-row viewport.
    pub fn scroll_up(&mut self, lines: usize, height: usize) {
        let max = self.lines.len().saturating_sub(height);
        self.scroll_back = self.scroll_back.saturating_add(lines).min(max);
    }

    /// Scroll toward newer lines.
    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Follow the newest line again.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Lines between the viewport bottom and the newest line.
    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    /// Remove all lines and reset scrolling.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.scroll_back = 0;
    }

    /// All stored lines, oldest first.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Newest line. `None` if empty.
    pub fn last(&self) -> Option<&Line> {
        self.lines.back()
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Buffer holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Maximum number of stored lines.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Lines evicted to make room since creation.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(lines: impl Iterator<Item = &'a Line>) -> Vec<&'a str> {
        lines.map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn short_text_is_one_line() {
        let mut buf = DisplayBuffer::new();
        assert_eq!(buf.append("hello", 10, LineKind::Generic), 1);
        assert_eq!(buf.last().map(|l| l.text.as_str()), Some("hello"));
    }

    #[test]
    fn long_text_wraps_at_width() {
        let mut buf = DisplayBuffer::new();
        assert_eq!(buf.append("abcdefghij", 4, LineKind::Server), 3);
        assert_eq!(texts(buf.lines()), vec!["abcd", "efgh", "ij"]);
        assert!(buf.lines().all(|l| l.kind == LineKind::Server));
    }

    #[test]
    fn exact_multiple_has_no_trailing_empty_line() {
        let mut buf = DisplayBuffer::new();
        assert_eq!(buf.append("abcdef", 3, LineKind::Generic), 2);
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let mut buf = DisplayBuffer::new();
        assert_eq!(buf.append("", 10, LineKind::Generic), 1);
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn width_is_clamped_to_max_line_len() {
        let mut buf = DisplayBuffer::new();
        let text = "x".repeat(MAX_LINE_LEN + 1);
        assert_eq!(buf.append(&text, 1000, LineKind::Generic), 2);
        assert!(buf.lines().all(|l| l.text.chars().count() <= MAX_LINE_LEN));

        assert_eq!(buf.append("ab", 0, LineKind::Generic), 2);
    }

    #[test]
    fn wraps_on_characters_not_bytes() {
        let mut buf = DisplayBuffer::new();
        assert_eq!(buf.append("\u{e9}\u{e9}\u{e9}", 2, LineKind::Generic), 2);
        assert_eq!(texts(buf.lines()), vec!["\u{e9}\u{e9}", "\u{e9}"]);
    }

    #[test]
    fn full_buffer_evicts_oldest() {
        let mut buf = DisplayBuffer::with_capacity(3);
        for text in ["a", "b", "c", "d", "e"] {
            buf.append(text, 10, LineKind::Generic);
        }

        assert_eq!(buf.len(), 3);
        assert_eq!(buf.evicted(), 2);
        assert_eq!(texts(buf.lines()), vec!["c", "d", "e"]);
    }

    #[test]
    fn viewport_shows_newest_lines() {
        let mut buf = DisplayBuffer::new();
        for text in ["1", "2", "3", "4", "5"] {
            buf.append(text, 10, LineKind::Generic);
        }

        assert_eq!(texts(buf.viewport(2)), vec!["4", "5"]);
        assert_eq!(texts(buf.viewport(10)), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(buf.viewport(0).count(), 0);
    }

    #[test]
    fn scrolling_moves_viewport_and_clamps() {
        let mut buf = DisplayBuffer::new();
        for text in ["1", "2", "3", "4", "5"] {
            buf.append(text, 10, LineKind::Generic);
        }

        buf.scroll_up(1, 2);
        assert_eq!(texts(buf.viewport(2)), vec!["3", "4"]);

        buf.scroll_up(100, 2);
        assert_eq!(buf.scroll_back(), 3);
        assert_eq!(texts(buf.viewport(2)), vec!["1", "2"]);

        buf.scroll_down(100);
        assert_eq!(texts(buf.viewport(2)), vec!["4", "5"]);
    }

    #[test]
    fn scrolled_viewport_stays_anchored_on_append() {
        let mut buf = DisplayBuffer::new();
        for text in ["1", "2", "3", "4", "5"] {
            buf.append(text, 10, LineKind::Generic);
        }
        buf.scroll_up(2, 2);
        assert_eq!(texts(buf.viewport(2)), vec!["2", "3"]);

        buf.append("6", 10, LineKind::Generic);
        assert_eq!(texts(buf.viewport(2)), vec!["2", "3"]);

        buf.scroll_to_bottom();
        assert_eq!(texts(buf.viewport(2)), vec!["5", "6"]);
    }

    #[test]
    fn viewport_is_idempotent() {
        let mut buf = DisplayBuffer::new();
        buf.append("some text that wraps around", 5, LineKind::Generic);

        let first: Vec<Line> = buf.viewport(3).cloned().collect();
        let second: Vec<Line> = buf.viewport(3).cloned().collect();
        assert_eq!(first, second);
    }
}
