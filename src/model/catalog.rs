//! Embedded seed catalog.
//!
//! The catalog ships inside the binary as TOML (`assets/catalog.toml`) and is
//! parsed once at startup. Parsing can only fail if the embedded file is
//! malformed, which the tests below guard against.

use crate::model::{Flashcard, InvalidFlashcard};
use serde::Deserialize;
use thiserror::Error;

/// Raw TOML of the compiled-in catalog.
pub const SEED_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// Errors raised while loading a catalog document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The document is not valid TOML or does not match the card schema.
    #[error("Invalid catalog TOML: {reason}")]
    Parse {
        /// Parser error details.
        reason: String,
    },

    /// A card failed validation.
    #[error("Invalid card #{position}: {source}")]
    InvalidCard {
        /// 1-based position of the card in the document.
        position: usize,
        /// What was wrong with it.
        #[source]
        source: InvalidFlashcard,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    card: Vec<CardRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CardRecord {
    category: String,
    question: String,
    answer: String,
}

/// Parse a catalog document into validated cards, preserving document order.
pub fn parse_catalog(source: &str) -> Result<Vec<Flashcard>, CatalogError> {
    let file: CatalogFile = toml::from_str(source).map_err(|e| CatalogError::Parse {
        reason: e.to_string(),
    })?;

    file.card
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            Flashcard::new(record.category, record.question, record.answer).map_err(|source| {
                CatalogError::InvalidCard {
                    position: idx + 1,
                    source,
                }
            })
        })
        .collect()
}

/// Parse the compiled-in catalog.
pub fn seed_cards() -> Result<Vec<Flashcard>, CatalogError> {
    parse_catalog(SEED_CATALOG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_parses() {
        let cards = seed_cards().expect("embedded catalog must parse");
        assert_eq!(cards.len(), 16, "Seed catalog should hold 16 cards");
    }

    #[test]
    fn seed_catalog_category_counts() {
        let cards = seed_cards().expect("embedded catalog must parse");
        let count = |tag: &str| cards.iter().filter(|c| c.category() == tag).count();
        assert_eq!(count("Java"), 6);
        assert_eq!(count("HTML"), 5);
        assert_eq!(count("CSS"), 5);
    }

    #[test]
    fn seed_catalog_keeps_document_order() {
        let cards = seed_cards().expect("embedded catalog must parse");
        assert_eq!(
            cards[0].question(),
            "What is the basic syntax to declare a variable in Java?"
        );
        assert_eq!(
            cards[0].answer(),
            "DataType variableName = value; // e.g., int x = 5;"
        );
        assert_eq!(cards[6].category(), "HTML");
        assert_eq!(cards[11].category(), "CSS");
        assert_eq!(
            cards[15].answer(),
            "Padding is inside the border, margin is outside the border."
        );
    }

    #[test]
    fn seed_catalog_preserves_quotes_in_literal_strings() {
        let cards = seed_cards().expect("embedded catalog must parse");
        assert_eq!(
            cards[7].answer(),
            "<element class=\"classname\">Content</element>"
        );
        assert_eq!(cards[10].answer(), "<a href=\"url\">Link text</a>");
    }

    #[test]
    fn parse_catalog_accepts_empty_document() {
        let cards = parse_catalog("").expect("empty document is a valid empty catalog");
        assert!(cards.is_empty());
    }

    #[test]
    fn parse_catalog_rejects_invalid_toml() {
        let result = parse_catalog("this is not valid TOML ][}{");
        assert!(
            matches!(result, Err(CatalogError::Parse { .. })),
            "Expected Parse error, got {:?}",
            result
        );
    }

    #[test]
    fn parse_catalog_rejects_missing_field() {
        let result = parse_catalog(
            r#"
[[card]]
category = "Java"
question = "q"
"#,
        );
        assert!(matches!(result, Err(CatalogError::Parse { .. })));
    }

    #[test]
    fn parse_catalog_reports_position_of_invalid_card() {
        let result = parse_catalog(
            r#"
[[card]]
category = "Java"
question = "q1"
answer = "a1"

[[card]]
category = "Java"
question = ""
answer = "a2"
"#,
        );
        assert_eq!(
            result,
            Err(CatalogError::InvalidCard {
                position: 2,
                source: InvalidFlashcard::EmptyQuestion,
            })
        );
    }

    #[test]
    fn invalid_card_error_message_names_position() {
        let err = CatalogError::InvalidCard {
            position: 3,
            source: InvalidFlashcard::EmptyAnswer,
        };
        assert_eq!(
            err.to_string(),
            "Invalid card #3: Flashcard answer cannot be empty"
        );
    }
}
