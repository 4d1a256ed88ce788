//! Target word selection
//!
//! The target set of a round is every dictionary word of 3 to 5 letters whose
//! letter multiset fits within the master word's. It is computed with a single
//! pass over the dictionary: one histogram for the master, one pointwise
//! comparison per word.

use super::Dictionary;
use crate::core::{MAX_WORD_LEN, MIN_WORD_LEN, Word};
use crate::error::GameError;
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Points awarded per letter of a correctly guessed word
pub const POINTS_PER_LETTER: u32 = 10;

/// One word to find, with its guess state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEntry {
    word: Word,
    found: bool,
    hint_index: usize,
}

impl TargetEntry {
    /// New unfound entry with a uniformly random hint position
    pub fn new<R: Rng + ?Sized>(word: Word, rng: &mut R) -> Self {
        let hint_index = rng.random_range(0..word.len());
        Self {
            word,
            found: false,
            hint_index,
        }
    }

    /// New unfound entry with a fixed hint position
    ///
    /// Returns `None` if `hint_index` is not a position of `word`.
    #[must_use]
    pub fn with_hint(word: Word, hint_index: usize) -> Option<Self> {
        (hint_index < word.len()).then_some(Self {
            word,
            found: false,
            hint_index,
        })
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// Position revealed while the word is unfound
    #[inline]
    #[must_use]
    pub fn hint_index(&self) -> usize {
        self.hint_index
    }

    /// Letter revealed while the word is unfound
    #[inline]
    #[must_use]
    pub fn hint_letter(&self) -> u8 {
        self.word.char_at(self.hint_index)
    }

    /// Score for finding this word
    #[inline]
    #[must_use]
    pub fn points(&self) -> u32 {
        self.word.len() as u32 * POINTS_PER_LETTER
    }

    /// Mark as found; returns false if it already was
    pub(crate) fn mark_found(&mut self) -> bool {
        !std::mem::replace(&mut self.found, true)
    }
}

/// Ordered sequence of target entries; order is display order
///
/// Only [`build_targets`] fills a target set:
///
/// ```compile_fail
/// use wow_game::core::Word;
/// use wow_game::game::{TargetEntry, TargetSet};
///
/// let entry = TargetEntry::with_hint(Word::new("zzz").unwrap(), 0).unwrap();
/// let set = TargetSet::from_entries([entry]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSet {
    entries: Vec<TargetEntry>,
}

impl TargetSet {
    /// Assemble a target set from entries, dropping repeated words
    #[cfg(test)]
    #[must_use]
    pub(crate) fn from_entries(entries: impl IntoIterator<Item = TargetEntry>) -> Self {
        let mut seen = FxHashSet::default();
        let entries = entries
            .into_iter()
            .filter(|e| seen.insert(e.word.clone()))
            .collect();
        Self { entries }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TargetEntry> {
        self.entries.iter()
    }

    /// Entry for `text`, if it is a target
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&TargetEntry> {
        self.entries.iter().find(|e| e.word.text() == text)
    }

    pub(crate) fn get_mut(&mut self, text: &str) -> Option<&mut TargetEntry> {
        self.entries.iter_mut().find(|e| e.word.text() == text)
    }

    /// Number of entries already found
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.entries.iter().filter(|e| e.found).count()
    }

    /// Sum of points over every entry
    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.entries.iter().map(TargetEntry::points).sum()
    }

    /// Sum of points over found entries
    #[must_use]
    pub fn found_points(&self) -> u32 {
        self.entries
            .iter()
            .filter(|e| e.found)
            .map(TargetEntry::points)
            .sum()
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a TargetEntry;
    type IntoIter = std::slice::Iter<'a, TargetEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Dictionary words spellable from `master`, in dictionary order
///
/// The scan is data-parallel; `collect` into a `Vec` keeps dictionary order.
///
/// # Examples
/// ```
/// use wow_game::core::Word;
/// use wow_game::game::{Dictionary, spellable_words};
///
/// let dict = Dictionary::build(["eel", "vee", "level", "levee"]).unwrap();
/// let master = Word::new("level").unwrap();
///
/// let found: Vec<&str> = spellable_words(&dict, &master).iter().map(|w| w.text()).collect();
/// assert_eq!(found, ["EEL", "VEE", "LEVEL"]);
/// ```
#[must_use]
pub fn spellable_words<'d>(dict: &'d Dictionary, master: &Word) -> Vec<&'d Word> {
    let pool = master.letter_counts();

    dict.as_slice()
        .par_iter()
        .filter(|w| (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&w.len()))
        .filter(|w| w.is_spellable_from(&pool))
        .collect()
}

/// Build the round's target set
///
/// Target words are copied out of the dictionary. Hint positions are drawn
/// from `rng` in target order.
///
/// # Errors
///
/// Returns `GameError::OutOfMemory` if the target storage cannot be reserved.
pub fn build_targets<R: Rng + ?Sized>(
    dict: &Dictionary,
    master: &Word,
    rng: &mut R,
) -> Result<TargetSet, GameError> {
    let words = spellable_words(dict, master);

    let mut entries = Vec::new();
    entries.try_reserve_exact(words.len())?;
    for word in words {
        entries.push(TargetEntry::new(word.clone(), &mut *rng));
    }

    Ok(TargetSet { entries })
}

/// Target words found by enumerating letter arrangements of `master`
///
/// Every arrangement of 3 to 5 distinct master positions is looked up in the
/// dictionary. Yields the same words as [`spellable_words`], in discovery
/// order, at far higher cost; kept as an independent check of the scan.
#[must_use]
pub fn enumerate_targets(dict: &Dictionary, master: &Word) -> Vec<Word> {
    let letters = master.as_bytes();
    let mut seen = FxHashSet::default();
    let mut found = Vec::new();
    let mut used = vec![false; letters.len()];
    let mut buf = Vec::with_capacity(MAX_WORD_LEN);

    for len in MIN_WORD_LEN..=MAX_WORD_LEN.min(letters.len()) {
        arrange(letters, len, &mut used, &mut buf, &mut |candidate: &[u8]| {
            let text = String::from_utf8_lossy(candidate);
            if dict.contains(&text) && seen.insert(text.to_string()) {
                if let Ok(word) = Word::new(text) {
                    found.push(word);
                }
            }
        });
    }

    found
}

fn arrange(
    letters: &[u8],
    len: usize,
    used: &mut [bool],
    buf: &mut Vec<u8>,
    visit: &mut impl FnMut(&[u8]),
) {
    if buf.len() == len {
        visit(buf.as_slice());
        return;
    }
    for i in 0..letters.len() {
        if used[i] {
            continue;
        }
        used[i] = true;
        buf.push(letters[i]);
        arrange(letters, len, used, buf, visit);
        buf.pop();
        used[i] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    const SAMPLE: [&str; 16] = [
        "CAT", "ACT", "TACO", "COAT", "TACOS", "CATS", "HOUSE", "HOSE", "SHOE", "USE", "HUE",
        "SUE", "OH", "LEVEL", "EEL", "VEE",
    ];

    fn sample_dict() -> Dictionary {
        Dictionary::build(SAMPLE).unwrap()
    }

    fn texts(set: &TargetSet) -> Vec<&str> {
        set.iter().map(|e| e.word().text()).collect()
    }

    fn targets_for(master: &str) -> TargetSet {
        let master = Word::new(master).unwrap();
        build_targets(&sample_dict(), &master, &mut StdRng::seed_from_u64(9)).unwrap()
    }

    #[test]
    fn house_targets_in_dictionary_order() {
        let set = targets_for("HOUSE");
        assert_eq!(texts(&set), ["HOUSE", "HOSE", "SHOE", "USE", "HUE", "SUE"]);
    }

    #[test]
    fn tacos_targets_in_dictionary_order() {
        let set = targets_for("TACOS");
        assert_eq!(texts(&set), ["CAT", "ACT", "TACO", "COAT", "TACOS", "CATS"]);
    }

    #[test]
    fn level_targets_respect_multiplicity() {
        // VEE needs two E and one V: fits. LEVEL has L×2 E×2 V×1.
        let set = targets_for("LEVEL");
        assert_eq!(texts(&set), ["LEVEL", "EEL", "VEE"]);

        let dict = Dictionary::build(["ellee", "levee", "eel"]).unwrap();
        let master = Word::new("LEVEL").unwrap();
        let words: Vec<&str> = spellable_words(&dict, &master)
            .iter()
            .map(|w| w.text())
            .collect();
        assert_eq!(words, ["EEL"]);
    }

    #[test]
    fn empty_target_set_is_legal() {
        let dict = Dictionary::build(["cat", "dog"]).unwrap();
        let master = Word::new("HOUSE").unwrap();
        let set = build_targets(&dict, &master, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.total_points(), 0);
    }

    #[test]
    fn targets_fit_within_master() {
        let dict = sample_dict();
        for master in dict.length5_words() {
            let pool = master.letter_counts();
            let set = build_targets(&dict, master, &mut StdRng::seed_from_u64(1)).unwrap();

            let mut seen = HashSet::new();
            for entry in &set {
                assert!(entry.word().letter_counts().fits_within(&pool));
                assert!((3..=5).contains(&entry.word().len()));
                assert!(dict.contains(entry.word().text()));
                assert!(seen.insert(entry.word().text()), "duplicate target");
                assert!(!entry.is_found());
            }
        }
    }

    #[test]
    fn hint_index_within_word() {
        let dict = load_english();
        let master = Word::new("HOUSE").unwrap();
        for seed in 0..20 {
            let set = build_targets(&dict, &master, &mut StdRng::seed_from_u64(seed)).unwrap();
            for entry in &set {
                assert!(entry.hint_index() < entry.word().len());
                assert_eq!(entry.hint_letter(), entry.word().char_at(entry.hint_index()));
            }
        }
    }

    #[test]
    fn same_seed_same_hints() {
        let a = targets_for("HOUSE");
        let b = targets_for("HOUSE");
        assert_eq!(a, b);
    }

    #[test]
    fn enumeration_agrees_with_scan() {
        let dict = load_english();
        for master in dict.length5_words().take(60) {
            let scanned: HashSet<String> = spellable_words(&dict, master)
                .iter()
                .map(|w| w.text().to_string())
                .collect();
            let enumerated: HashSet<String> = enumerate_targets(&dict, master)
                .iter()
                .map(|w| w.text().to_string())
                .collect();
            assert_eq!(scanned, enumerated, "mismatch for {master}");
        }
    }

    #[test]
    fn enumeration_has_no_duplicates() {
        let dict = sample_dict();
        let master = Word::new("LEVEL").unwrap();
        let words = enumerate_targets(&dict, &master);
        let unique: HashSet<&Word> = words.iter().collect();
        assert_eq!(words.len(), unique.len());
    }

    #[test]
    fn with_hint_checks_bounds() {
        let shoe = Word::new("SHOE").unwrap();
        assert!(TargetEntry::with_hint(shoe.clone(), 3).is_some());
        assert!(TargetEntry::with_hint(shoe, 4).is_none());
    }

    #[test]
    fn mark_found_is_one_way() {
        let mut entry = TargetEntry::with_hint(Word::new("HOSE").unwrap(), 0).unwrap();
        assert!(entry.mark_found());
        assert!(entry.is_found());
        assert!(!entry.mark_found());
        assert!(entry.is_found());
    }

    #[test]
    fn points_scale_with_length() {
        let set = targets_for("HOUSE");
        assert_eq!(set.total_points(), 220);
        assert_eq!(set.found_points(), 0);
    }

    #[test]
    fn from_entries_drops_repeats() {
        let cat = Word::new("CAT").unwrap();
        let set = TargetSet::from_entries([
            TargetEntry::with_hint(cat.clone(), 0).unwrap(),
            TargetEntry::with_hint(cat, 2).unwrap(),
        ]);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get("CAT").unwrap().hint_index(), 0);
    }

    fn load_english() -> Dictionary {
        crate::wordlists::loader::load_dictionary(crate::wordlists::Language::English).unwrap()
    }
}
