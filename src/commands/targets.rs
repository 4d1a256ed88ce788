//! Target listing command
//!
//! Shows which words a given master word hides.

use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN};
use crate::error::GameError;
use crate::game::{Dictionary, POINTS_PER_LETTER, parse_master, spellable_words};

/// Target words of one master word, grouped by length
pub struct TargetsReport {
    pub master: String,
    pub in_dictionary: bool,
    /// `(length, words)` for every length from 3 to 5, in dictionary order
    pub by_length: Vec<(usize, Vec<String>)>,
    pub max_score: u32,
}

impl TargetsReport {
    /// Number of target words
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_length.iter().map(|(_, words)| words.len()).sum()
    }
}

/// List the target set of `master`
///
/// # Errors
///
/// Returns `GameError::BadArgument` if `master` is not five letters A-Z.
pub fn list_targets(dict: &Dictionary, master: &str) -> Result<TargetsReport, GameError> {
    let master = parse_master(master)?;
    let words = spellable_words(dict, &master);

    let by_length: Vec<(usize, Vec<String>)> = (MIN_WORD_LEN..=MAX_WORD_LEN)
        .map(|len| {
            let group = words
                .iter()
                .filter(|w| w.len() == len)
                .map(|w| w.text().to_string())
                .collect();
            (len, group)
        })
        .collect();

    let max_score = words.iter().map(|w| w.len() as u32 * POINTS_PER_LETTER).sum();

    Ok(TargetsReport {
        in_dictionary: dict.contains(master.text()),
        master: master.text().to_string(),
        by_length,
        max_score,
    })
}
