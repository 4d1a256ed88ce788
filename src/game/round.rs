//! Round state and guess evaluation

use super::{Dictionary, TargetSet, build_targets, pick};
use crate::core::{LetterCount, MAX_WORD_LEN, Word};
use crate::error::GameError;
use rand::Rng;

/// Guess that ends the round (matched case-insensitively)
pub const QUIT_TOKEN: &str = "QUIT";

/// Classification of a single guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player asked to stop
    Quit,
    /// The guess uses letters the master word does not have (or has too few of)
    NotSpellable,
    /// The guess is a target that was already found
    AlreadyFound,
    /// The guess is a new target; carries the points awarded
    Correct(u32),
    /// The guess is spellable but is not a target
    Invalid,
}

impl Outcome {
    /// Whether the guess was rejected without changing the round
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(self, Self::NotSpellable | Self::AlreadyFound | Self::Invalid)
    }
}

/// State of one round: master word, targets and score
///
/// Built only through [`RoundState::start`] or [`RoundState::with_master`],
/// which check the master word:
///
/// ```compile_fail
/// use wow_game::core::Word;
/// use wow_game::game::{RoundState, TargetSet};
///
/// let round = RoundState::from_parts(Word::new("cat").unwrap(), TargetSet::default());
/// ```
#[derive(Debug, Clone)]
pub struct RoundState {
    master: Word,
    pool: LetterCount,
    targets: TargetSet,
    score: u32,
}

impl RoundState {
    /// Start a round with a random master word
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyPool` if the dictionary has no five-letter
    /// word, or `GameError::OutOfMemory` if the targets cannot be stored.
    pub fn start<R: Rng + ?Sized>(dict: &Dictionary, rng: &mut R) -> Result<Self, GameError> {
        let master = pick(dict, rng)?;
        Self::with_master(dict, master, rng)
    }

    /// Start a round with a chosen master word
    ///
    /// # Errors
    ///
    /// Returns `GameError::BadArgument` if `master` is not five letters, or
    /// `GameError::OutOfMemory` if the targets cannot be stored.
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wow_game::core::Word;
    /// use wow_game::game::{Dictionary, Outcome, RoundState};
    ///
    /// let dict = Dictionary::build(["house", "hose", "shoe"]).unwrap();
    /// let master = Word::new("house").unwrap();
    /// let mut round = RoundState::with_master(&dict, master, &mut StdRng::seed_from_u64(1)).unwrap();
    ///
    /// assert_eq!(round.evaluate("hose"), Outcome::Correct(40));
    /// assert_eq!(round.evaluate("hose"), Outcome::AlreadyFound);
    /// assert_eq!(round.score(), 40);
    /// ```
    pub fn with_master<R: Rng + ?Sized>(
        dict: &Dictionary,
        master: Word,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if master.len() != MAX_WORD_LEN {
            return Err(GameError::BadArgument(format!(
                "master word '{master}' must have exactly {MAX_WORD_LEN} letters"
            )));
        }
        let targets = build_targets(dict, &master, rng)?;
        Ok(Self::from_parts(master, targets))
    }

    /// Assemble a round from an already built target set
    #[must_use]
    pub(crate) fn from_parts(master: Word, targets: TargetSet) -> Self {
        Self {
            pool: master.letter_counts(),
            master,
            targets,
            score: 0,
        }
    }

    /// Classify a guess and apply it
    ///
    /// The guess is ASCII-uppercased first. Checks run in order: quit token,
    /// spellability against the master's letters, target lookup.
    pub fn evaluate(&mut self, input: &str) -> Outcome {
        let guess = input.to_ascii_uppercase();

        if guess == QUIT_TOKEN {
            return Outcome::Quit;
        }

        let spellable =
            LetterCount::from_bytes(guess.as_bytes()).is_some_and(|c| c.fits_within(&self.pool));
        if !spellable {
            return Outcome::NotSpellable;
        }

        let Some(entry) = self.targets.get_mut(&guess) else {
            return Outcome::Invalid;
        };
        if !entry.mark_found() {
            return Outcome::AlreadyFound;
        }

        let points = entry.points();
        self.score += points;
        Outcome::Correct(points)
    }

    #[inline]
    #[must_use]
    pub fn master(&self) -> &Word {
        &self.master
    }

    #[inline]
    #[must_use]
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    #[inline]
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.targets.found_count()
    }

    /// Number of targets in the round
    #[must_use]
    pub fn total(&self) -> usize {
        self.targets.len()
    }

    /// Score reached once every target is found
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.targets.total_points()
    }

    /// Every target found (true immediately for an empty target set)
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.targets.iter().all(super::TargetEntry::is_found)
    }
}
