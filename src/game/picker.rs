//! Master word selection

use super::Dictionary;
use crate::core::{MAX_WORD_LEN, Word};
use crate::error::GameError;
use rand::Rng;

/// Pick the round's master word: a uniformly random five-letter entry
///
/// # Errors
///
/// Returns `GameError::EmptyPool` if the dictionary has no five-letter word.
pub fn pick<R: Rng + ?Sized>(dict: &Dictionary, rng: &mut R) -> Result<Word, GameError> {
    dict.random_length5(rng)
}

/// Validate a master word supplied by the player
///
/// The word is not required to be in the dictionary; only its letters matter.
///
/// # Errors
///
/// Returns `GameError::BadArgument` unless `text` is exactly five letters A-Z
/// (either case).
///
/// # Examples
/// ```
/// use wow_game::game::parse_master;
///
/// assert_eq!(parse_master("house").unwrap().text(), "HOUSE");
/// assert!(parse_master("hose").is_err());
/// ```
pub fn parse_master(text: &str) -> Result<Word, GameError> {
    let word = Word::new(text)
        .map_err(|e| GameError::BadArgument(format!("master word '{text}': {e}")))?;

    if word.len() != MAX_WORD_LEN {
        return Err(GameError::BadArgument(format!(
            "master word '{text}' must have exactly {MAX_WORD_LEN} letters"
        )));
    }

    Ok(word)
}
