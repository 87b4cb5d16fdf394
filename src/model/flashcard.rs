//! Flashcard record with a validating smart constructor.
//!
//! A card is immutable once built. The raw constructor is never exported;
//! every card in the catalog goes through [`Flashcard::new`].

use std::fmt;

/// A single (category, question, answer) record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    category: String,
    question: String,
    answer: String,
}

impl Flashcard {
    /// Smart constructor: all three fields must be non-empty.
    pub fn new(
        category: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<Self, InvalidFlashcard> {
        let category = category.into();
        let question = question.into();
        let answer = answer.into();

        if category.trim().is_empty() {
            return Err(InvalidFlashcard::EmptyCategory);
        }
        if question.trim().is_empty() {
            return Err(InvalidFlashcard::EmptyQuestion);
        }
        if answer.trim().is_empty() {
            return Err(InvalidFlashcard::EmptyAnswer);
        }

        Ok(Self {
            category,
            question,
            answer,
        })
    }

    /// Category tag as written in the catalog.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Front of the card.
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Back of the card.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Text for the requested side of the card.
    pub fn side(&self, showing_answer: bool) -> &str {
        if showing_answer {
            &self.answer
        } else {
            &self.question
        }
    }

    /// Case-insensitive category comparison.
    pub fn in_category(&self, tag: &str) -> bool {
        self.category.eq_ignore_ascii_case(tag)
    }
}

impl fmt::Display for Flashcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.question)
    }
}

// ===== Error Types =====

/// Why a flashcard was rejected by [`Flashcard::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidFlashcard {
    /// Category was empty or whitespace.
    #[error("Flashcard category cannot be empty")]
    EmptyCategory,
    /// Question was empty or whitespace.
    #[error("Flashcard question cannot be empty")]
    EmptyQuestion,
    /// Answer was empty or whitespace.
    #[error("Flashcard answer cannot be empty")]
    EmptyAnswer,
}

// ===== Tests =====
