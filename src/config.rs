//! Run configuration
//!
//! Built from the command line in `main.rs`; everything here has a sensible
//! default so tests can construct it directly.

use crate::wordlists::Language;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Courtesy pause after each guess feedback
pub const DEFAULT_PAUSE: Duration = Duration::from_secs(1);

/// Settings for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub language: Language,
    /// Fixed seed; `None` seeds from the wall clock
    pub seed: Option<u64>,
    pub pause: Duration,
    /// Print the master word before the first frame
    pub reveal: bool,
    /// Fixed master word instead of a random pick
    pub master: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl GameConfig {
    #[must_use]
    pub const fn new(language: Language) -> Self {
        Self {
            language,
            seed: None,
            pause: DEFAULT_PAUSE,
            reveal: false,
            master: None,
        }
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub const fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    #[must_use]
    pub const fn with_reveal(mut self, reveal: bool) -> Self {
        self.reveal = reveal;
        self
    }

    #[must_use]
    pub fn with_master(mut self, master: Option<String>) -> Self {
        self.master = master;
        self
    }

    /// The process-wide random source for this session
    #[must_use]
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or_else(clock_seed))
    }
}

/// Seed derived from the current wall-clock time
#[must_use]
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs() ^ u64::from(d.subsec_nanos()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.language, Language::English);
        assert_eq!(config.pause, DEFAULT_PAUSE);
        assert!(config.seed.is_none());
        assert!(!config.reveal);
        assert!(config.master.is_none());
    }

    #[test]
    fn builder_methods_chain() {
        let config = GameConfig::new(Language::Italian)
            .with_seed(Some(9))
            .with_pause(Duration::ZERO)
            .with_reveal(true)
            .with_master(Some("level".to_string()));

        assert_eq!(config.language, Language::Italian);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.pause, Duration::ZERO);
        assert!(config.reveal);
        assert_eq!(config.master.as_deref(), Some("level"));
    }

    #[test]
    fn fixed_seed_is_reproducible() {
        let config = GameConfig::default().with_seed(Some(1234));
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
