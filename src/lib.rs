//! Words of Wonder
//!
//! A terminal word puzzle: five shuffled letters hide every dictionary word of
//! three to five letters that can be spelled from them. Find them all.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wow_game::core::Word;
//! use wow_game::game::{Dictionary, Outcome, RoundState};
//!
//! let dict = Dictionary::build(["cat", "act", "taco", "coat", "tacos", "cats"]).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut round = RoundState::with_master(&dict, Word::new("tacos").unwrap(), &mut rng).unwrap();
//!
//! assert_eq!(round.total(), 6);
//! assert_eq!(round.evaluate("cats"), Outcome::Correct(40));
//! assert_eq!(round.evaluate("coco"), Outcome::NotSpellable);
//! ```

// Core domain types
pub mod core;

// Dictionary, targets and round state
pub mod game;

// Embedded word sources
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub mod config;
pub mod error;

pub use error::GameError;
