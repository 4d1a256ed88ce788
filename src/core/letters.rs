//! Letter multiset over A-Z
//!
//! A `LetterCount` is a 26-slot histogram. A word is spellable from a pool of
//! letters exactly when its histogram fits within the pool's, slot by slot.

use super::Word;
use std::fmt;
use std::ops::{Add, AddAssign};

const ALPHABET: usize = 26;

/// Histogram of the letters A-Z
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCount([u32; ALPHABET]);

impl LetterCount {
    /// Empty histogram
    pub const EMPTY: Self = Self([0; ALPHABET]);

    /// Histogram of a validated word
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut counts = Self::EMPTY;
        for &b in word.as_bytes() {
            counts.0[usize::from(b - b'A')] += 1;
        }
        counts
    }

    /// Histogram of arbitrary bytes
    ///
    /// Returns `None` if any byte lies outside `b'A'..=b'Z'`: such input can
    /// never be spelled from a pool of letters.
    ///
    /// # Examples
    /// ```
    /// use wow_game::core::LetterCount;
    ///
    /// let counts = LetterCount::from_bytes(b"LEVEL").unwrap();
    /// assert_eq!(counts.get(b'L'), 2);
    /// assert_eq!(counts.get(b'V'), 1);
    /// assert!(LetterCount::from_bytes(b"level").is_none());
    /// ```
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let mut counts = Self::EMPTY;
        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return None;
            }
            counts.0[usize::from(b - b'A')] += 1;
        }
        Some(counts)
    }

    /// Occurrences of `letter` (0 for anything outside A-Z)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: u8) -> u32 {
        if letter.is_ascii_uppercase() {
            self.0[usize::from(letter - b'A')]
        } else {
            0
        }
    }

    /// Total number of letters
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    /// Pointwise `self[i] <= pool[i]` for every letter
    #[inline]
    #[must_use]
    pub fn fits_within(&self, pool: &Self) -> bool {
        self.0.iter().zip(pool.0.iter()).all(|(a, b)| a <= b)
    }
}

impl Add for LetterCount {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl AddAssign for LetterCount {
    fn add_assign(&mut self, rhs: Self) {
        for (slot, extra) in self.0.iter_mut().zip(rhs.0) {
            *slot += extra;
        }
    }
}

impl fmt::Display for LetterCount {
    /// Letters in alphabetical order, repeated by multiplicity
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &count) in self.0.iter().enumerate() {
            let letter = char::from(b'A' + i as u8);
            for _ in 0..count {
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
