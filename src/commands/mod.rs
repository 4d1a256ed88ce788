//! Command implementations

pub mod play;
pub mod survey;
pub mod targets;

pub use play::{MAX_TOKEN_BYTES, PlayOptions, PlaySummary, RoundEnd, TokenReader, run_play};
pub use survey::{MasterSummary, SurveyStatistics, run_survey};
pub use targets::{TargetsReport, list_targets};
