//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, CategoryFilter};
use crate::state::{AppState, CardStore};
use crate::view::{initial_state, CliArgs, TuiApp};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Seed catalog, all categories, default terminal size (80x24)
    pub fn seeded() -> Result<Self, AppError> {
        Self::seeded_with_args(CliArgs::new(CategoryFilter::All, true), 80, 24)
    }

    /// Seed catalog with custom startup args and terminal size
    pub fn seeded_with_args(args: CliArgs, width: u16, height: u16) -> Result<Self, AppError> {
        Self::from_store(CardStore::seeded()?, args, width, height)
    }

    /// Harness over a catalog given as TOML text
    ///
    /// # Returns
    /// * `Ok(Self)` - Initialized harness, all categories, 80x24
    /// * `Err(AppError)` - If the catalog cannot be parsed
    #[allow(dead_code)]
    pub fn from_catalog(source: &str) -> Result<Self, AppError> {
        Self::from_store(
            CardStore::load(source)?,
            CliArgs::new(CategoryFilter::All, true),
            80,
            24,
        )
    }

    fn from_store(
        store: CardStore,
        args: CliArgs,
        width: u16,
        height: u16,
    ) -> Result<Self, AppError> {
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let app_state = initial_state(store, &args);
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default());

        Ok(Self { app, running: true })
    }

    /// Send a single key event
    ///
    /// # Returns
    /// * `true` - If app quit as a result of this key
    /// * `false` - If app is still running
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }

        quit
    }

    /// Send a sequence of keys
    ///
    /// Continues sending keys until the sequence is exhausted or app quits.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break; // Quit encountered
            }
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Send a mouse click event at the specified coordinates
    ///
    /// Renders first so the click resolves against a drawn layout.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.send_mouse(MouseEventKind::Down(MouseButton::Left), column, row);
    }

    /// Send a mouse wheel event
    pub fn scroll_wheel(&mut self, down: bool) {
        let kind = if down {
            MouseEventKind::ScrollDown
        } else {
            MouseEventKind::ScrollUp
        };
        self.send_mouse(kind, 0, 0);
    }

    fn send_mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }

        let _ = self.app.render_test();

        self.app.handle_mouse_test(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }
}
