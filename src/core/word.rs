//! Puzzle word representation
//!
//! A Word is an uppercase A-Z string of 3 to 5 letters. Normalization happens
//! here, at the border, so everything downstream works on a clean 26-symbol
//! alphabet.

use super::LetterCount;
use std::borrow::Borrow;
use std::fmt;

/// Shortest admissible word
pub const MIN_WORD_LEN: usize = 3;

/// Longest admissible word (and the length of every master word)
pub const MAX_WORD_LEN: usize = 5;

/// A validated uppercase word of 3 to 5 letters
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(
                    f,
                    "Word must be {MIN_WORD_LEN} to {MAX_WORD_LEN} letters, got {len}"
                )
            }
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a raw string
    ///
    /// ASCII lowercase letters are uppercased; nothing else is translated.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not between 3 and 5 bytes
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use wow_game::core::Word;
    ///
    /// let word = Word::new("house").unwrap();
    /// assert_eq!(word.text(), "HOUSE");
    ///
    /// assert!(Word::new("oh").is_err());
    /// assert!(Word::new("città").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();
        text.make_ascii_uppercase();

        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes (all in `b'A'..=b'Z'`)
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)] // A Word is never empty
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> u8 {
        self.as_bytes()[position]
    }

    /// Letter histogram of this word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCount {
        LetterCount::from_word(self)
    }

    /// Whether this word can be spelled from `pool` without reusing a letter
    /// more often than the pool holds it
    #[inline]
    #[must_use]
    pub fn is_spellable_from(&self, pool: &LetterCount) -> bool {
        self.letter_counts().fits_within(pool)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

// Hash and Eq are derived from `text` alone, so lookups by `&str` agree.
impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.text
    }
}
