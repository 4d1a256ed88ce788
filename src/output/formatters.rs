//! Formatting utilities for terminal output

use crate::core::Word;
use crate::game::{Outcome, TargetEntry};
use rand::Rng;
use rand::seq::SliceRandom;

/// Marker appended to found words
pub const CHECK_MARK: char = '✓';

/// Placeholder for hidden letters
pub const HIDDEN: char = '_';

/// How a message should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Space-separated letters, e.g. `H O U S E`
#[must_use]
pub fn spaced(letters: &[u8]) -> String {
    let mut out = String::with_capacity(letters.len() * 2);
    for (i, &b) in letters.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(char::from(b));
    }
    out
}

/// Masked rendering of a target row
///
/// Found words are spelled out with a check mark; unfound words show only the
/// hint letter.
///
/// # Examples
/// ```
/// use wow_game::core::Word;
/// use wow_game::game::TargetEntry;
/// use wow_game::output::formatters::mask_row;
///
/// let entry = TargetEntry::with_hint(Word::new("shoe").unwrap(), 2).unwrap();
/// assert_eq!(mask_row(&entry), "_ _ O _");
/// ```
#[must_use]
pub fn mask_row(entry: &TargetEntry) -> String {
    if entry.is_found() {
        return format!("{} {CHECK_MARK}", spaced(entry.word().as_bytes()));
    }

    let masked: Vec<u8> = (0..entry.word().len())
        .map(|i| {
            if i == entry.hint_index() {
                entry.word().char_at(i)
            } else {
                HIDDEN as u8
            }
        })
        .collect();
    spaced(&masked)
}

/// Master letters in a fresh random order
pub fn shuffled_letters<R: Rng + ?Sized>(master: &Word, rng: &mut R) -> Vec<u8> {
    let mut letters = master.as_bytes().to_vec();
    letters.shuffle(rng);
    letters
}

/// One-line feedback for a guess outcome
#[must_use]
pub fn outcome_message(outcome: Outcome) -> (String, MessageStyle) {
    match outcome {
        Outcome::Correct(points) => (format!("Valid word! +{points} points"), MessageStyle::Success),
        Outcome::AlreadyFound => (
            "You already found this word!".to_string(),
            MessageStyle::Info,
        ),
        Outcome::NotSpellable => (
            "Word cannot be formed with available letters!".to_string(),
            MessageStyle::Error,
        ),
        Outcome::Invalid => ("Word not valid!!".to_string(), MessageStyle::Error),
        Outcome::Quit => ("Thank you for playing. Bye...".to_string(), MessageStyle::Info),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        width
    } else {
        (value * width / max).min(width)
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn entry(word: &str, hint: usize) -> TargetEntry {
        TargetEntry::with_hint(Word::new(word).unwrap(), hint).unwrap()
    }

    #[test]
    fn mask_row_unfound_shows_hint_only() {
        assert_eq!(mask_row(&entry("SHOE", 2)), "_ _ O _");
        assert_eq!(mask_row(&entry("HOUSE", 0)), "H _ _ _ _");
        assert_eq!(mask_row(&entry("CAT", 2)), "_ _ T");
    }

    #[test]
    fn mask_row_found_shows_word_and_check() {
        let mut shoe = entry("SHOE", 2);
        shoe.mark_found();
        assert_eq!(mask_row(&shoe), "S H O E ✓");
    }

    #[test]
    fn spaced_letters() {
        assert_eq!(spaced(b"HOUSE"), "H O U S E");
        assert_eq!(spaced(b""), "");
    }

    #[test]
    fn shuffled_letters_is_permutation() {
        let master = Word::new("LEVEL").unwrap();
        let mut rng = StdRng::seed_from_u64(4);

        for _ in 0..10 {
            let mut letters = shuffled_letters(&master, &mut rng);
            letters.sort_unstable();
            assert_eq!(letters, b"EELLV");
        }
    }

    #[test]
    fn shuffled_letters_changes_order_over_turns() {
        let master = Word::new("HOUSE").unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let orders: std::collections::HashSet<Vec<u8>> =
            (0..20).map(|_| shuffled_letters(&master, &mut rng)).collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn outcome_messages() {
        assert_eq!(
            outcome_message(Outcome::Correct(40)),
            ("Valid word! +40 points".to_string(), MessageStyle::Success)
        );
        assert_eq!(outcome_message(Outcome::Invalid).1, MessageStyle::Error);
        assert_eq!(outcome_message(Outcome::NotSpellable).1, MessageStyle::Error);
        assert!(outcome_message(Outcome::AlreadyFound).0.contains("already"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0, 6, 6), "░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(6, 6, 6), "██████");
        assert_eq!(create_progress_bar(0, 0, 4), "████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(3, 6, 10), "█████░░░░░");
    }
}
