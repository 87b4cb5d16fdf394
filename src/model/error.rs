//! Error types for the flashdeck application.
//!
//! A small hierarchy built with `thiserror`. Domain errors convert into
//! [`AppError`] via `From`, so startup code composes with `?`.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error
//!   - [`CatalogError`] - The embedded catalog failed to parse or validate
//!   - [`ConfigError`] - A config file exists but cannot be read or parsed
//!   - [`LoggingError`] - The log file could not be set up
//!   - `std::io::Error` - Terminal/TUI failures
//!
//! The card state machine itself never fails: every intent is total, and an
//! empty filter result is a renderable state rather than an error.

use crate::config::loader::ConfigError;
use crate::logging::LoggingError;
use crate::model::catalog::CatalogError;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
///
/// All of these are fatal at startup. Once the event loop is running only
/// terminal I/O can fail.
#[derive(Debug, Error)]
pub enum AppError {
    /// The compiled-in catalog is malformed.
    #[error("Failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),

    /// The config file could not be read or parsed.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
