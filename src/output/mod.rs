//! Terminal output formatting
//!
//! Frame rendering, report printing and status lines.

pub mod display;
pub mod formatters;
pub mod log;

pub use display::{print_survey_statistics, print_targets_report, render_frame, render_summary};
pub use formatters::MessageStyle;
