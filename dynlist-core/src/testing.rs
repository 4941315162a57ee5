//! Test utilities for rendering and event simulation
//!
//! - [`key`]: build a `KeyEvent` from a key string (`key("ctrl+c")`)
//! - [`key_event`], [`click`]: build [`EventKind`]s for components
//! - [`RenderHarness`]: render into a `TestBackend` and read the screen back
//!
//! # Example
//!
//! ```
//! use dynlist_core::testing::RenderHarness;
//! use dynlist_core::{AppState, Keybindings, ListUi};
//!
//! let mut render = RenderHarness::new(40, 10);
//! let mut ui = ListUi::new(Keybindings::defaults());
//! let state = AppState::default();
//!
//! let screen = render.render_to_string_plain(|frame| {
//!     ui.render(frame, frame.area(), &state);
//! });
//! assert!(screen.contains("Items (0)"));
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Frame, Terminal};

use crate::event::EventKind;
use crate::keybindings::parse_key_string;

/// Create a `KeyEvent` from a key string.
///
/// # Panics
///
/// Panics if the key string cannot be parsed.
pub fn key(s: &str) -> KeyEvent {
    parse_key_string(s).unwrap_or_else(|| panic!("Invalid key string: {:?}", s))
}

/// Create a `KeyEvent` for a character with no modifiers.
pub fn char_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Key press event from a key string
pub fn key_event(s: &str) -> EventKind {
    EventKind::Key(key(s))
}

/// Left click at a cell
pub fn click(column: u16, row: u16) -> EventKind {
    EventKind::Click { column, row }
}

/// Left click on the first cell of `area`
pub fn click_on(area: Rect) -> EventKind {
    click(area.x, area.y)
}

/// Render harness over ratatui's `TestBackend`
pub struct RenderHarness {
    terminal: Terminal<TestBackend>,
}

impl RenderHarness {
    /// # Panics
    ///
    /// Panics if the test terminal cannot be created.
    pub fn new(width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .unwrap_or_else(|e| panic!("Failed to create test terminal: {e}"));
        Self { terminal }
    }

    /// Draw one frame and return the resulting buffer
    pub fn render(&mut self, draw: impl FnOnce(&mut Frame)) -> &Buffer {
        self.terminal
            .draw(draw)
            .unwrap_or_else(|e| panic!("Failed to draw frame: {e}"));
        self.terminal.backend().buffer()
    }

    /// Draw one frame and return its text, one line per row, without styling
    pub fn render_to_string_plain(&mut self, draw: impl FnOnce(&mut Frame)) -> String {
        buffer_to_string_plain(self.render(draw))
    }
}

/// Text content of a buffer, rows joined by newlines, trailing spaces trimmed
pub fn buffer_to_string_plain(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let line: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
