//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod catalog;
pub mod category;
pub mod error;
pub mod flashcard;
pub mod key_action;

// Re-export for convenience
pub use catalog::{parse_catalog, seed_cards, CatalogError, SEED_CATALOG};
pub use category::{CategoryFilter, ALL_LABEL};
pub use error::AppError;
pub use flashcard::{Flashcard, InvalidFlashcard};
pub use key_action::KeyAction;
