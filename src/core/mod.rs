//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod letters;
mod word;

pub use letters::LetterCount;
pub use word::{MAX_WORD_LEN, MIN_WORD_LEN, Word, WordError};
