//! Authoritative card catalog plus the active category filter.
//!
//! Filtering is a derived view: `visible_cards` is recomputed on demand from
//! the immutable catalog and the filter, so switching filters can never lose
//! cards.

use crate::model::{parse_catalog, seed_cards, CatalogError, CategoryFilter, Flashcard};

/// Ordered catalog of flashcards with a category filter.
#[derive(Debug, Clone)]
pub struct CardStore {
    /// Fixed at construction, never mutated afterwards.
    cards: Vec<Flashcard>,
    filter: CategoryFilter,
}

impl CardStore {
    /// Create a store over the given cards with the `All` filter.
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards,
            filter: CategoryFilter::All,
        }
    }

    /// Load a store from a TOML catalog document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the document is malformed or a card has an
    /// empty field.
    pub fn load(source: &str) -> Result<Self, CatalogError> {
        parse_catalog(source).map(Self::new)
    }

    /// Load the compiled-in seed catalog.
    pub fn seeded() -> Result<Self, CatalogError> {
        seed_cards().map(Self::new)
    }

    /// Replace the active filter. Any tag is accepted; an unknown one simply
    /// yields no visible cards.
    pub fn set_filter(&mut self, filter: impl Into<CategoryFilter>) {
        self.filter = filter.into();
    }

    /// Filter currently applied.
    pub fn active_filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Cards passing the active filter, in catalog order.
    pub fn visible_cards(&self) -> Vec<&Flashcard> {
        self.visible_iter().collect()
    }

    /// Number of cards passing the active filter.
    pub fn visible_len(&self) -> usize {
        self.visible_iter().count()
    }

    /// Card at `index` within the filtered view.
    pub fn visible_card(&self, index: usize) -> Option<&Flashcard> {
        self.visible_iter().nth(index)
    }

    fn visible_iter(&self) -> impl Iterator<Item = &Flashcard> + '_ {
        self.cards.iter().filter(|card| self.filter.matches(card))
    }

    /// Distinct category tags in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for card in &self.cards {
            if !tags.iter().any(|t| t.eq_ignore_ascii_case(card.category())) {
                tags.push(card.category());
            }
        }
        tags
    }

    /// The full, unfiltered catalog.
    pub fn all_cards(&self) -> &[Flashcard] {
        &self.cards
    }

    /// Number of cards in the catalog, ignoring the filter.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the catalog holds no cards.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
