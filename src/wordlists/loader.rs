//! Dictionary loading from embedded sources

use super::Language;
use crate::error::GameError;
use crate::game::Dictionary;

/// Build the dictionary for a language from its embedded source
///
/// # Errors
///
/// Returns `GameError::OutOfMemory` if word storage cannot be reserved.
///
/// # Examples
/// ```
/// use wow_game::wordlists::{Language, loader::load_dictionary};
///
/// let dict = load_dictionary(Language::English).unwrap();
/// assert!(dict.contains("HOUSE"));
/// ```
pub fn load_dictionary(language: Language) -> Result<Dictionary, GameError> {
    Dictionary::build(language.source().iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_dictionary_has_masters() {
        let dict = load_dictionary(Language::English).unwrap();
        assert!(dict.count_of_length(5) > 0);
        assert!(dict.contains("CAT"));
        assert!(!dict.contains("OH"));
        assert!(!dict.contains("WONDERS"));
    }

    #[test]
    fn italian_dictionary_drops_accented_words() {
        let dict = load_dictionary(Language::Italian).unwrap();
        assert!(dict.count_of_length(5) > 0);
        assert!(dict.contains("CASA"));
        assert!(dict.iter().all(|w| w.text().is_ascii()));
    }

    #[test]
    fn embedded_dictionaries_are_clean() {
        for language in [Language::English, Language::Italian] {
            let dict = load_dictionary(language).unwrap();
            for word in dict.iter() {
                assert!((3..=5).contains(&word.len()), "{word} has bad length");
                assert!(word.as_bytes().iter().all(u8::is_ascii_uppercase));
            }
        }
    }

    #[test]
    fn italian_duplicates_collapse() {
        // "sole" and "ora" appear twice in the raw Italian source
        let dict = load_dictionary(Language::Italian).unwrap();
        let soles = dict.iter().filter(|w| w.text() == "SOLE").count();
        assert_eq!(soles, 1);
        assert!(dict.len() < Language::Italian.source().len());
    }
}
