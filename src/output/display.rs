//! Display functions for game frames and command results

use super::formatters::{
    MessageStyle, create_progress_bar, mask_row, outcome_message, spaced,
};
use crate::commands::{RoundEnd, SurveyStatistics, TargetsReport};
use crate::game::{Outcome, RoundState};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

const RULE_WIDTH: usize = 56;

fn styled(text: &str, style: MessageStyle) -> ColoredString {
    match style {
        MessageStyle::Info => text.bright_white(),
        MessageStyle::Success => text.green().bold(),
        MessageStyle::Error => text.red(),
    }
}

/// Render one game frame
///
/// Score and progress, one masked row per target, the given letter order and
/// the feedback for the previous guess, if any.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_frame<W: Write>(
    out: &mut W,
    round: &RoundState,
    letters: &[u8],
    last: Option<Outcome>,
) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(RULE_WIDTH).cyan())?;
    writeln!(
        out,
        "Score: {}    Found: {}/{} [{}]\n",
        round.score().to_string().bright_yellow().bold(),
        round.found_count(),
        round.total(),
        create_progress_bar(round.found_count(), round.total(), 12).green()
    )?;

    for entry in round.targets() {
        let row = mask_row(entry);
        let row = if entry.is_found() {
            row.green().bold()
        } else {
            row.normal()
        };
        writeln!(out, "        Word: {row}")?;
    }
    writeln!(out)?;

    writeln!(out, "Letters: {}", spaced(letters).bright_cyan().bold())?;

    if let Some(outcome) = last {
        let (text, style) = outcome_message(outcome);
        writeln!(out, "\n{}", styled(&text, style))?;
    }

    Ok(())
}

/// Render the closing lines of a round
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn render_summary<W: Write>(out: &mut W, end: RoundEnd, score: u32) -> io::Result<()> {
    match end {
        RoundEnd::Won => {
            writeln!(
                out,
                "\n{}",
                " * CONGRATULATIONS! You found all the words!".bright_green().bold()
            )?;
        }
        RoundEnd::Quit => {
            let (text, style) = outcome_message(Outcome::Quit);
            writeln!(out, "{}", styled(&text, style))?;
        }
        RoundEnd::InputClosed => {
            writeln!(out, "\n{}", "Input closed, ending the round.".bright_white())?;
        }
    }
    writeln!(
        out,
        "Final score: {}",
        score.to_string().bright_yellow().bold()
    )
}

/// Print the target set of a master word
pub fn print_targets_report(report: &TargetsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "TARGETS FOR".bright_cyan().bold(),
        report.master.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if !report.in_dictionary {
        println!(
            "\n{}",
            "(master word is not in the dictionary)".bright_black()
        );
    }

    for (len, words) in &report.by_length {
        println!(
            "\n{} ({}):",
            format!("{len} letters").bright_cyan().bold(),
            words.len()
        );
        if words.is_empty() {
            println!("   -");
        } else {
            println!("   {}", words.join(" "));
        }
    }

    println!(
        "\n📊 {} words, {} points available",
        report.total().to_string().bright_yellow(),
        report.max_score.to_string().bright_yellow()
    );
}

/// Print the result of a dictionary survey
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY SURVEY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Dictionary:".bright_cyan().bold());
    println!("   Words:            {}", stats.dictionary_words);
    println!("   Master words:     {}", stats.masters);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    if stats.masters == 0 {
        println!("\n{}", "No five-letter words: no round can start.".red());
        return;
    }

    println!("\n📈 {}", "Targets per master:".bright_cyan().bold());
    println!(
        "   Average:          {}",
        format!("{:.2}", stats.average_targets).bright_yellow().bold()
    );
    println!("   Fewest:           {}", stats.min_targets.to_string().yellow());
    println!("   Most:             {}", stats.max_targets.to_string().green());
    println!(
        "   Only themselves:  {}",
        stats.lonely_masters.to_string().bright_black()
    );

    println!("\n🏆 {}", "Richest masters:".bright_cyan().bold());
    let widest = stats.max_targets.max(1);
    for (i, master) in stats.richest.iter().enumerate() {
        println!(
            "   {:>2}. {} {} {:3} words {:4} pts",
            (i + 1).to_string().bright_black(),
            master.master.bright_white().bold(),
            create_progress_bar(master.targets, widest, 20).green(),
            master.targets,
            master.max_score
        );
    }
}
