//! flashdeck
//!
//! TUI flashcard viewer for stepping through programming question/answer
//! cards by category.
//!
//! The card state machine (`model`, `state`) is pure and has no terminal
//! dependency; `view` is a thin ratatui shell over it.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
