//! Status lines
//!
//! `LOG:` lines go to stdout, `ERR:` lines to stderr.

use colored::Colorize;

/// Informational status line
pub fn info(message: &str) {
    println!("{} {}", "LOG:".bright_black(), message.bright_black());
}

/// Error line on stderr
pub fn error(message: &str) {
    eprintln!("{} {}", "ERR:".red().bold(), message.red());
}
