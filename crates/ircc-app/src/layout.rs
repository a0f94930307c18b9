//! Pane geometry.
//!
//! Buffers wrap text when it is appended, so the App needs pane widths before
//! anything is drawn. [`PaneLayout`] computes inner (border-less) pane sizes
//! from the terminal size with the same constants the terminal UI uses to
//! split the screen.
//!
//! ```text
//! +-- messages ---------------------+- users -+
//! |                                 |         |
//! +-- info: #channel | topic -------+---------+
//! +-- debug (optional) ----------------------+
//! +-- input ---------------------------------+
//!  status bar
//! ```

/// Outer width of the roster pane.
pub const ROSTER_WIDTH: u16 = 20;
/// Outer height of the info pane.
pub const INFO_HEIGHT: u16 = 7;
/// Outer height of the debug pane.
pub const DEBUG_HEIGHT: u16 = 8;
/// Outer height of the input pane.
pub const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar.
pub const STATUS_HEIGHT: u16 = 1;
/// Minimum outer height of the message pane.
pub const MESSAGES_MIN_HEIGHT: u16 = 3;
/// Columns and rows taken by a pane border.
pub const BORDER: u16 = 2;

/// Inner size of one pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneSize {
    /// Text columns.
    pub width: u16,
    /// Text rows.
    pub height: u16,
}

/// Inner sizes of the text panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    /// Message pane.
    pub messages: PaneSize,
    /// Info pane.
    pub info: PaneSize,
    /// Debug pane, when enabled.
    pub debug: Option<PaneSize>,
}

impl PaneLayout {
    /// Compute pane sizes for a terminal of `cols` x `rows`.
    pub fn for_terminal(cols: u16, rows: u16, debug: bool) -> Self {
        let debug_height = if debug { DEBUG_HEIGHT } else { 0 };
        let fixed = INFO_HEIGHT + debug_height + INPUT_HEIGHT + STATUS_HEIGHT;
        let messages_height = rows.saturating_sub(fixed).max(MESSAGES_MIN_HEIGHT);

        let full_width = cols.saturating_sub(BORDER).max(1);

        Self {
            messages: PaneSize {
                width: cols.saturating_sub(ROSTER_WIDTH).saturating_sub(BORDER).max(1),
                height: messages_height.saturating_sub(BORDER).max(1),
            },
            info: PaneSize { width: full_width, height: INFO_HEIGHT - BORDER },
            debug: debug.then_some(PaneSize { width: full_width, height: DEBUG_HEIGHT - BORDER }),
        }
    }
}
