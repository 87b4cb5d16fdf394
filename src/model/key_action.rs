//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Card navigation
    /// Show the previous card in the visible list. Default: h/←/p
    PrevCard,
    /// Show the next card in the visible list. Default: l/→/n
    NextCard,
    /// Toggle between question and answer. Default: Space/Enter/f
    Flip,

    // Category filter
    /// Show the whole catalog. Default: 0/a
    SelectAll,
    /// Select the nth category (1-based, in category bar order). Default: 1-9
    SelectCategory(usize),
    /// Advance the filter to the next entry of the category bar. Default: Tab
    NextCategory,
    /// Move the filter to the previous entry of the category bar. Default: Shift+Tab
    PrevCategory,

    // Help overlay
    /// Scroll the help overlay up by one line. Default: k/↑
    ScrollUp,
    /// Scroll the help overlay down by one line. Default: j/↓
    ScrollDown,

    // Application
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
