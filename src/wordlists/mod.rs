//! Word sources for the puzzle
//!
//! Provides the two embedded raw word lists and the language token that
//! selects between them.

mod embedded;
pub mod loader;

pub use embedded::{WORDS_EN, WORDS_EN_COUNT, WORDS_IT, WORDS_IT_COUNT};

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Dictionary language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Italian,
}

impl Language {
    /// Command-line token for this language
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Italian => "it",
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Italian => "Italian",
        }
    }

    /// Raw embedded word source for this language
    #[must_use]
    pub const fn source(self) -> &'static [&'static str] {
        match self {
            Self::English => WORDS_EN,
            Self::Italian => WORDS_IT,
        }
    }
}

impl FromStr for Language {
    type Err = GameError;

    /// Tokens are matched exactly: `en` or `it`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::English),
            "it" => Ok(Self::Italian),
            other => Err(GameError::BadArgument(format!(
                "unknown language '{other}' (expected 'en' or 'it')"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_count_matches_const() {
        assert_eq!(WORDS_EN.len(), WORDS_EN_COUNT);
    }

    #[test]
    fn italian_count_matches_const() {
        assert_eq!(WORDS_IT.len(), WORDS_IT_COUNT);
    }

    #[test]
    fn language_tokens_parse() {
        assert_eq!("en".parse::<Language>(), Ok(Language::English));
        assert_eq!("it".parse::<Language>(), Ok(Language::Italian));
    }

    #[test]
    fn language_unknown_token_is_bad_argument() {
        for token in ["fr", "EN", "", "english"] {
            assert!(matches!(
                token.parse::<Language>(),
                Err(GameError::BadArgument(_))
            ));
        }
    }

    #[test]
    fn language_default_is_english() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::default().code(), "en");
    }

    #[test]
    fn sources_follow_language() {
        assert_eq!(Language::English.source().len(), WORDS_EN_COUNT);
        assert_eq!(Language::Italian.source().len(), WORDS_IT_COUNT);
    }

    #[test]
    fn sources_contain_raw_entries_to_filter() {
        // The raw lists carry short, long and accented entries on purpose
        assert!(WORDS_EN.iter().any(|w| w.len() < 3));
        assert!(WORDS_EN.iter().any(|w| w.len() > 5));
        assert!(WORDS_IT.iter().any(|w| !w.is_ascii()));
    }
}
