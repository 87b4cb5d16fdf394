//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state.
//! State transitions are plain functions testable without a terminal.

use crate::state::ViewerState;

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// Wraps the card [`ViewerState`] with the UI-only state the terminal front
/// end needs. The viewer is the domain state; everything else is chrome.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Card navigation state machine.
    viewer: ViewerState,

    /// Whether the help overlay is currently visible.
    /// While visible, card and category actions are blocked.
    pub help_visible: bool,

    /// Vertical scroll offset inside the help overlay.
    pub help_scroll: u16,

    /// Whether styled colors are drawn. Disabled by `--no-color`/`NO_COLOR`.
    pub colors_enabled: bool,
}

impl AppState {
    /// Create new AppState with default UI state.
    pub fn new(viewer: ViewerState) -> Self {
        Self {
            viewer,
            help_visible: false,
            help_scroll: 0,
            colors_enabled: true,
        }
    }

    /// Get immutable reference to the card viewer.
    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    /// Get mutable reference to the card viewer.
    pub fn viewer_mut(&mut self) -> &mut ViewerState {
        &mut self.viewer
    }

    /// Toggle the help overlay. Opening it always starts at the top.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll = 0;
    }

    /// Close the help overlay if open. Returns whether it was open.
    pub fn close_help(&mut self) -> bool {
        let was_open = self.help_visible;
        self.help_visible = false;
        self.help_scroll = 0;
        was_open
    }

    /// Scroll the help text down one line. Callers clamp to the content.
    pub fn scroll_help_down(&mut self) {
        self.help_scroll = self.help_scroll.saturating_add(1);
    }

    /// Scroll the help text up one line, stopping at the top.
    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }
}
