//! Category filter applied to the catalog.

use crate::model::Flashcard;
use std::fmt;

/// Label of the synthetic category that matches every card.
pub const ALL_LABEL: &str = "All";

/// The active category constraint.
///
/// `All` shows the whole catalog; `Tag` keeps only cards whose category
/// equals the tag, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every card in the catalog.
    #[default]
    All,
    /// Cards of one category.
    Tag(String),
}

impl CategoryFilter {
    /// Parse a category label. `"All"` (any case) selects everything,
    /// any other string becomes a tag filter, known or not.
    ///
    /// The label is taken as given. Callers reading user input trim it first.
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(ALL_LABEL) {
            Self::All
        } else {
            Self::Tag(label.to_string())
        }
    }

    /// Whether the card passes this filter.
    pub fn matches(&self, card: &Flashcard) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => card.in_category(tag),
        }
    }

    /// Label shown in the category bar.
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Tag(tag) => tag,
        }
    }

    /// True for the unfiltered view.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Whether this filter selects the given category label.
    pub fn selects(&self, label: &str) -> bool {
        match self {
            Self::All => label.eq_ignore_ascii_case(ALL_LABEL),
            Self::Tag(tag) => tag.eq_ignore_ascii_case(label),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
