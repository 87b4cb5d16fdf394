//! Cursor and flip state over the card store.
//!
//! `ViewerState` is the navigation state machine. Its state is the tuple
//! (filter, index, showing_answer) and it changes only through four intents:
//! `select_category`, `next`, `previous` and `flip`. Every intent is total;
//! intents that cannot apply are ignored rather than reported as errors.
//!
//! # Transitions
//!
//! - `select_category`: filter replaced, index reset to 0, question side shown
//! - `next` / `previous`: move one card if in range, question side shown
//! - `flip`: toggle question/answer when at least one card is visible

use crate::model::{CategoryFilter, Flashcard};
use crate::state::CardStore;
use tracing::debug;

/// Body text shown when the active filter matches no cards.
pub const EMPTY_PLACEHOLDER: &str = "No cards in this category.";

/// Everything the display needs to draw the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSnapshot {
    /// Category of the current card, empty when nothing is visible.
    pub category_text: String,
    /// Question or answer text, or [`EMPTY_PLACEHOLDER`].
    pub body_text: String,
    /// `"<n> of <total>"`, 1-based.
    pub position_text: String,
    /// A previous card exists in the filtered view.
    pub can_go_prev: bool,
    /// A next card exists in the filtered view.
    pub can_go_next: bool,
    /// Whether `body_text` is the answer side.
    pub showing_answer: bool,
}

/// Navigation state over a [`CardStore`].
#[derive(Debug, Clone)]
pub struct ViewerState {
    store: CardStore,
    /// Always interpreted against the store's current visible view.
    current_index: usize,
    showing_answer: bool,
}

impl ViewerState {
    /// Start on the first visible card, question side up.
    pub fn new(store: CardStore) -> Self {
        Self {
            store,
            current_index: 0,
            showing_answer: false,
        }
    }

    /// Apply a category filter. Always resets the cursor and flip state.
    pub fn select_category(&mut self, filter: impl Into<CategoryFilter>) {
        let filter = filter.into();
        debug!(filter = %filter, "select category");
        self.store.set_filter(filter);
        self.current_index = 0;
        self.showing_answer = false;
    }

    /// Move to the next card. Returns `false` (and changes nothing) at the
    /// last card.
    pub fn next(&mut self) -> bool {
        if self.current_index + 1 < self.store.visible_len() {
            self.current_index += 1;
            self.showing_answer = false;
            debug!(index = self.current_index, "next card");
            true
        } else {
            debug!(index = self.current_index, "next ignored at last card");
            false
        }
    }

    /// Move to the previous card. Returns `false` (and changes nothing) at
    /// the first card.
    pub fn previous(&mut self) -> bool {
        if self.current_index > 0 {
            self.current_index -= 1;
            self.showing_answer = false;
            debug!(index = self.current_index, "previous card");
            true
        } else {
            debug!("previous ignored at first card");
            false
        }
    }

    /// Toggle between question and answer. Returns `false` when no card is
    /// visible.
    pub fn flip(&mut self) -> bool {
        if self.store.visible_len() == 0 {
            debug!("flip ignored on empty view");
            return false;
        }
        self.showing_answer = !self.showing_answer;
        debug!(showing_answer = self.showing_answer, "flip card");
        true
    }

    /// Render-ready view of the current state.
    pub fn render(&self) -> RenderSnapshot {
        let total = self.store.visible_len();

        match self.current_card() {
            Some(card) => RenderSnapshot {
                category_text: card.category().to_string(),
                body_text: card.side(self.showing_answer).to_string(),
                position_text: format!("{} of {}", self.current_index + 1, total),
                can_go_prev: self.current_index > 0,
                can_go_next: self.current_index + 1 < total,
                showing_answer: self.showing_answer,
            },
            None => RenderSnapshot {
                category_text: String::new(),
                body_text: EMPTY_PLACEHOLDER.to_string(),
                position_text: "0 of 0".to_string(),
                can_go_prev: false,
                can_go_next: false,
                showing_answer: false,
            },
        }
    }

    /// The card under the cursor, if any are visible.
    pub fn current_card(&self) -> Option<&Flashcard> {
        self.store.visible_card(self.current_index)
    }

    /// Zero-based cursor into the filtered view.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Whether the answer side is up.
    pub fn showing_answer(&self) -> bool {
        self.showing_answer
    }

    /// Filter currently applied to the store.
    pub fn active_filter(&self) -> &CategoryFilter {
        self.store.active_filter()
    }

    /// Cards passing the active filter, in catalog order.
    pub fn visible_cards(&self) -> Vec<&Flashcard> {
        self.store.visible_cards()
    }

    /// The underlying card store.
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Filters offered by the category bar: `All`, then each category.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(
                self.store
                    .categories()
                    .into_iter()
                    .map(|tag| CategoryFilter::Tag(tag.to_string())),
            )
            .collect()
    }
}

#[cfg(test)]
#[path = "viewer_state_tests.rs"]
mod tests;
