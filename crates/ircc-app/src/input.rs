//! Terminal-agnostic keyboard input and the operator's edit line.

/// Longest input line, in characters.
pub const MAX_INPUT_LEN: usize = 452;

/// Keyboard input abstraction.
///
/// Decouples application logic from the terminal library so tests can drive
/// the App with plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Enter/Return key (submit line).
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Escape key (quit).
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key (scroll messages back one line).
    Up,
    /// Down arrow key (scroll messages forward one line).
    Down,
    /// Page Up (scroll messages back one page).
    PageUp,
    /// Page Down (scroll messages forward one page).
    PageDown,
    /// Shift+Up (scroll the debug pane back one line).
    ShiftUp,
    /// Shift+Down (scroll the debug pane forward one line).
    ShiftDown,
    /// Home key (cursor to start).
    Home,
    /// End key (cursor to end).
    End,
}

/// Edit buffer with a cursor.
///
/// # Invariants
///
/// - `buffer` holds at most [`MAX_INPUT_LEN`] characters.
/// - `cursor` counts characters and is at most `buffer.chars().count()`.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    /// Create an empty input line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns `false` for keys that do not edit.
    pub fn edit(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                if self.char_len() < MAX_INPUT_LEN {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.insert(at, c);
                    self.cursor += 1;
                }
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.char_len() {
                    let at = self.byte_offset(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => self.cursor = (self.cursor + 1).min(self.char_len()),
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.char_len(),
            KeyInput::Enter
            | KeyInput::Esc
            | KeyInput::Up
            | KeyInput::Down
            | KeyInput::PageUp
            | KeyInput::PageDown
            | KeyInput::ShiftUp
            | KeyInput::ShiftDown => return false,
        }
        true
    }

    /// Take the submitted line, leaving the editor empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.buffer.char_indices().nth(chars).map_or(self.buffer.len(), |(i, _)| i)
    }
}
