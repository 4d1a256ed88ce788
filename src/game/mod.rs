//! Puzzle engine
//!
//! Dictionary, master word selection, target set construction and the
//! per-round guess state. Nothing here touches the terminal; randomness is
//! always passed in by the caller.

mod dictionary;
mod picker;
mod round;
mod targets;

pub use dictionary::Dictionary;
pub use picker::{parse_master, pick};
pub use round::{Outcome, QUIT_TOKEN, RoundState};
pub use targets::{
    POINTS_PER_LETTER, TargetEntry, TargetSet, build_targets, enumerate_targets, spellable_words,
};
