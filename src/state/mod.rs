//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod card_action_handler;
pub mod card_store;
pub mod viewer_state;

// Re-export for convenience
pub use app_state::AppState;
pub use card_action_handler::handle_card_action;
pub use card_store::CardStore;
pub use viewer_state::{RenderSnapshot, ViewerState, EMPTY_PLACEHOLDER};
