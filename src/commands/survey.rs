//! Dictionary survey - target set statistics for every master word
//!
//! Computes the target set size of each five-letter dictionary word, in
//! parallel, and summarizes how playable the dictionary is.

use crate::game::{Dictionary, POINTS_PER_LETTER, spellable_words};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Target set size of a single master word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterSummary {
    pub master: String,
    pub targets: usize,
    pub max_score: u32,
}

/// Statistics over all master words of a dictionary
#[derive(Debug)]
pub struct SurveyStatistics {
    pub dictionary_words: usize,
    pub masters: usize,
    pub average_targets: f64,
    pub min_targets: usize,
    pub max_targets: usize,
    /// Masters whose only target is the master itself
    pub lonely_masters: usize,
    /// Masters with the most targets, best first
    pub richest: Vec<MasterSummary>,
    pub duration: Duration,
}

/// Survey every five-letter word of `dict` as a potential master
///
/// `top` limits the `richest` list. The progress bar is drawn only when
/// `show_progress` is set.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_survey(dict: &Dictionary, top: usize, show_progress: bool) -> SurveyStatistics {
    let start = Instant::now();
    let masters: Vec<_> = dict.length5_words().collect();

    let pb = if show_progress {
        println!("🔎 Surveying {} master words...", masters.len());
        ProgressBar::new(masters.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut results: Vec<MasterSummary> = masters
        .par_iter()
        .map(|master| {
            let words = spellable_words(dict, master);
            pb.inc(1);
            MasterSummary {
                master: master.text().to_string(),
                targets: words.len(),
                max_score: words.iter().map(|w| w.len() as u32 * POINTS_PER_LETTER).sum(),
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    let total_targets: usize = results.iter().map(|r| r.targets).sum();
    let average_targets = if results.is_empty() {
        0.0
    } else {
        total_targets as f64 / results.len() as f64
    };
    let min_targets = results.iter().map(|r| r.targets).min().unwrap_or(0);
    let max_targets = results.iter().map(|r| r.targets).max().unwrap_or(0);
    let lonely_masters = results.iter().filter(|r| r.targets == 1).count();

    // Stable sort keeps dictionary order among equals
    results.sort_by_key(|r| std::cmp::Reverse(r.targets));
    results.truncate(top);

    SurveyStatistics {
        dictionary_words: dict.len(),
        masters: masters.len(),
        average_targets,
        min_targets,
        max_targets,
        lonely_masters,
        richest: results,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::{Language, loader::load_dictionary};

    fn sample() -> Dictionary {
        Dictionary::build([
            "CAT", "ACT", "TACO", "COAT", "TACOS", "CATS", "HOUSE", "HOSE", "SHOE", "USE", "HUE",
            "SUE", "OH", "LEVEL", "EEL", "VEE",
        ])
        .unwrap()
    }

    #[test]
    fn survey_sample_dictionary() {
        let stats = run_survey(&sample(), 10, false);

        assert_eq!(stats.dictionary_words, 15);
        assert_eq!(stats.masters, 3);
        assert_eq!(stats.min_targets, 3);
        assert_eq!(stats.max_targets, 6);
        assert_eq!(stats.lonely_masters, 0);
        assert!((stats.average_targets - 5.0).abs() < f64::EPSILON);

        let richest: Vec<&str> = stats.richest.iter().map(|m| m.master.as_str()).collect();
        assert_eq!(richest, ["TACOS", "HOUSE", "LEVEL"]);
        assert_eq!(stats.richest[1].max_score, 220);
    }

    #[test]
    fn survey_top_limits_list() {
        let stats = run_survey(&sample(), 1, false);
        assert_eq!(stats.richest.len(), 1);
        assert_eq!(stats.richest[0].targets, 6);
    }

    #[test]
    fn survey_without_masters() {
        let dict = Dictionary::build(["cat", "act"]).unwrap();
        let stats = run_survey(&dict, 5, false);
        assert_eq!(stats.masters, 0);
        assert!(stats.richest.is_empty());
        assert_eq!(stats.max_targets, 0);
    }

    #[test]
    fn survey_every_master_finds_itself() {
        let dict = load_dictionary(Language::English).unwrap();
        let stats = run_survey(&dict, usize::MAX, false);
        assert_eq!(stats.richest.len(), stats.masters);
        assert!(stats.richest.iter().all(|m| m.targets >= 1));
        assert!(stats.min_targets >= 1);
    }
}
