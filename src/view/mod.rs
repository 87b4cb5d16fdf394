//! TUI rendering and terminal management (impure shell)

mod category_bar;
pub mod constants;
mod help;
mod helpers;
mod layout;
mod styles;

pub use help::render_help_overlay;
pub use layout::{
    deck_title, hit_test, nav_button_regions, render_layout, ClickTarget, NavButton, ScreenLayout,
    DECK_TITLE,
};
pub use styles::{CardStyles, ColorConfig};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, CategoryFilter, KeyAction};
use crate::state::{handle_card_action, AppState, CardStore, ViewerState};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => AppError::Terminal(io),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    /// Layout of the last drawn frame (for mouse click detection)
    last_layout: Option<ScreenLayout>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture
    pub fn new(app_state: AppState) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::from_parts(terminal, app_state, KeyBindings::default()))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Blocks on input; the screen is
    /// redrawn after every handled event.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn from_parts(terminal: Terminal<B>, app_state: AppState, key_bindings: KeyBindings) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings,
            last_layout: None,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Escape closes the help overlay; it is not bound otherwise
        if key.code == KeyCode::Esc {
            self.app_state.close_help();
            return false;
        }

        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        // Help overlay captures input: only toggle, scroll and quit get through
        if self.app_state.help_visible {
            match action {
                KeyAction::Quit => return true,
                KeyAction::Help => self.app_state.toggle_help(),
                KeyAction::ScrollUp => self.app_state.scroll_help_up(),
                KeyAction::ScrollDown => self.scroll_help_down(),
                _ => {
                    debug!(?action, "Action blocked while help is visible");
                }
            }
            return false;
        }

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            _ => {
                self.app_state = handle_card_action(self.app_state.clone(), action);
            }
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Left clicks select category tabs and press navigation buttons. While
    /// help is visible the wheel scrolls the overlay and clicks are ignored.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.app_state.help_visible {
            match mouse.kind {
                MouseEventKind::ScrollUp => self.app_state.scroll_help_up(),
                MouseEventKind::ScrollDown => self.scroll_help_down(),
                _ => {}
            }
            return;
        }

        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        // Nothing drawn yet, nothing to hit
        let Some(layout) = self.last_layout else {
            return;
        };

        match hit_test(&layout, &self.app_state, mouse.column, mouse.row) {
            Some(ClickTarget::Category(filter)) => {
                self.app_state.viewer_mut().select_category(filter);
            }
            Some(ClickTarget::Nav(button)) => {
                let snapshot = self.app_state.viewer().render();
                if !button.enabled(&snapshot) {
                    debug!(?button, "Click on disabled button ignored");
                    return;
                }
                let action = match button {
                    NavButton::Previous => KeyAction::PrevCard,
                    NavButton::Flip => KeyAction::Flip,
                    NavButton::Next => KeyAction::NextCard,
                };
                self.app_state = handle_card_action(self.app_state.clone(), action);
            }
            None => {}
        }
    }

    /// Scroll the help overlay down, stopping at its last line.
    fn scroll_help_down(&mut self) {
        self.app_state.scroll_help_down();
        let max_scroll = help::help_line_count().saturating_sub(1);
        self.app_state.help_scroll = self.app_state.help_scroll.min(max_scroll);
    }

    /// Render the current frame
    ///
    /// Records the layout first so mouse clicks resolve against what is drawn.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.last_layout = Some(ScreenLayout::new(frame_area));

        self.terminal.draw(|frame| {
            render_layout(frame, &self.app_state);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// These methods are ONLY available in test builds.
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization. Used by the acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
    ) -> Self {
        Self::from_parts(terminal, app_state, key_bindings)
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    ///
    /// Provides access to the TestBackend buffer for inspection.
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// CLI arguments for TUI initialization
///
/// The subset of resolved configuration that shapes the TUI's initial state.
/// Built by main.rs after config precedence has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    /// Filter selected on startup.
    pub category: CategoryFilter,

    /// Whether to draw with colors.
    pub colors_enabled: bool,
}

impl CliArgs {
    /// Startup filter and color setting.
    pub fn new(category: CategoryFilter, colors_enabled: bool) -> Self {
        Self {
            category,
            colors_enabled,
        }
    }
}

/// Build the startup state: the viewer on the requested category, first card,
/// question side.
pub fn initial_state(store: CardStore, args: &CliArgs) -> AppState {
    let mut viewer = ViewerState::new(store);
    if !args.category.is_all() {
        viewer.select_category(args.category.clone());
    }

    let mut app_state = AppState::new(viewer);
    app_state.colors_enabled = args.colors_enabled;
    app_state
}

/// Initialize and run the TUI application over a card store
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_store(store: CardStore, args: CliArgs) -> Result<(), TuiError> {
    let app_state = initial_state(store, &args);
    info!(
        cards = app_state.viewer().store().len(),
        category = %args.category,
        "Starting TUI"
    );

    // Run the app and ensure cleanup happens even on error
    let result = TuiApp::new(app_state).and_then(|mut app| app.run());

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
