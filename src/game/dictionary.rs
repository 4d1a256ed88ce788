//! Admissible word set
//!
//! Built once from a raw word source; immutable afterwards.

use crate::core::{MAX_WORD_LEN, Word};
use crate::error::GameError;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Deduplicated, normalized set of words of 3 to 5 letters
///
/// Iteration order is first-admission order, which makes everything derived
/// from a dictionary deterministic for a fixed source.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashSet<Word>,
    /// Positions in `words` of the five-letter entries
    masters: Vec<usize>,
}

impl Dictionary {
    /// Build a dictionary from raw strings
    ///
    /// Each entry is ASCII-uppercased and kept only if it is 3 to 5 letters of
    /// A-Z. Later duplicates are dropped.
    ///
    /// # Errors
    ///
    /// Returns `GameError::OutOfMemory` if word storage cannot be reserved.
    ///
    /// # Examples
    /// ```
    /// use wow_game::game::Dictionary;
    ///
    /// let dict = Dictionary::build(["cat", "CAT", "oh", "x-ray", "house"]).unwrap();
    /// assert_eq!(dict.len(), 2);
    /// assert!(dict.contains("CAT"));
    /// assert!(!dict.contains("OH"));
    /// ```
    pub fn build<I, S>(source: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = source.into_iter();
        let (expected, _) = source.size_hint();

        let mut dict = Self::default();
        dict.words.try_reserve(expected)?;
        dict.index.try_reserve(expected)?;

        for raw in source {
            let Ok(word) = Word::new(raw.as_ref()) else {
                continue;
            };
            if dict.index.contains(&word) {
                continue;
            }

            dict.words.try_reserve(1)?;
            dict.index.try_reserve(1)?;
            if word.len() == MAX_WORD_LEN {
                dict.masters.try_reserve(1)?;
                dict.masters.push(dict.words.len());
            }
            dict.index.insert(word.clone());
            dict.words.push(word);
        }

        Ok(dict)
    }

    /// Number of admitted words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Byte-exact membership test (no case folding)
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    /// Words in admission order
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Words in admission order, as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Number of admitted words with exactly `len` letters
    #[must_use]
    pub fn count_of_length(&self, len: usize) -> usize {
        if len == MAX_WORD_LEN {
            return self.masters.len();
        }
        self.words.iter().filter(|w| w.len() == len).count()
    }

    /// All five-letter words, in admission order
    pub fn length5_words(&self) -> impl Iterator<Item = &Word> + '_ {
        self.masters.iter().map(|&i| &self.words[i])
    }

    /// Pick a five-letter word uniformly at random
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if the dictionary holds no five-letter word.
    pub fn random_length5<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, GameError> {
        self.masters
            .choose(rng)
            .map(|&i| self.words[i].clone())
            .ok_or(GameError::EmptyPool)
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
