//! Words of Wonder - CLI
//!
//! Find every word hidden in five shuffled letters, in the terminal.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::time::Duration;
use wow_game::{
    commands::{PlayOptions, list_targets, run_play, run_survey},
    config::GameConfig,
    game::{Dictionary, RoundState, parse_master},
    interactive::{App, run_tui},
    output::{log, print_survey_statistics, print_targets_report},
    wordlists::{Language, loader::load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wow_game",
    about = "Words of Wonder: find every word hidden in five shuffled letters",
    version,
    author
)]
struct Cli {
    /// Dictionary language: 'en' (default) or 'it'
    language: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random source (default: current time)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal, one guess at a time (default)
    Play {
        /// Print the master word before the round starts
        #[arg(long)]
        reveal: bool,

        /// Use this master word instead of a random one
        #[arg(short, long)]
        master: Option<String>,

        /// Skip the pause after each guess
        #[arg(long)]
        no_pause: bool,
    },

    /// Full-screen interactive mode
    Tui {
        /// Use this master word instead of a random one
        #[arg(short, long)]
        master: Option<String>,
    },

    /// List the words hidden in a master word
    Targets {
        /// Five-letter master word
        word: String,
    },

    /// Target set statistics for every master word in the dictionary
    Survey {
        /// Number of richest master words to list
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let language = match cli.language.as_deref() {
        Some(token) => {
            let language: Language = token.parse()?;
            log::info(&format!("Language set to {}", language.name()));
            language
        }
        None => Language::default(),
    };

    log::info("Parsing words...");
    let dict = load_dictionary(language)
        .with_context(|| format!("building the '{language}' dictionary"))?;
    log::info(&format!("Parsed {} valid words", dict.len()));

    let command = cli.command.unwrap_or(Commands::Play {
        reveal: false,
        master: None,
        no_pause: false,
    });

    match command {
        Commands::Play {
            reveal,
            master,
            no_pause,
        } => {
            let config = GameConfig::new(language)
                .with_seed(cli.seed)
                .with_reveal(reveal)
                .with_master(master)
                .with_pause(if no_pause {
                    Duration::ZERO
                } else {
                    wow_game::config::DEFAULT_PAUSE
                });
            run_play_command(&dict, &config)
        }
        Commands::Tui { master } => {
            let config = GameConfig::new(language)
                .with_seed(cli.seed)
                .with_master(master);
            run_tui_command(&dict, &config)
        }
        Commands::Targets { word } => {
            let report = list_targets(&dict, &word)?;
            print_targets_report(&report);
            Ok(())
        }
        Commands::Survey { top } => {
            let stats = run_survey(&dict, top, true);
            print_survey_statistics(&stats);
            Ok(())
        }
    }
}

/// Start a round from the configuration: fixed master or random pick
fn start_round(
    dict: &Dictionary,
    config: &GameConfig,
    rng: &mut rand::rngs::StdRng,
) -> Result<RoundState> {
    let round = match config.master.as_deref() {
        Some(text) => RoundState::with_master(dict, parse_master(text)?, rng)?,
        None => RoundState::start(dict, rng)?,
    };
    Ok(round)
}

fn run_play_command(dict: &Dictionary, config: &GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let mut round = start_round(dict, config, &mut rng)?;

    if config.reveal {
        println!("Master word: {}", round.master());
    }

    let options = PlayOptions {
        pause: config.pause,
        ..PlayOptions::default()
    };
    run_play(
        &mut round,
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut rng,
        options,
    )?;

    Ok(())
}

fn run_tui_command(dict: &Dictionary, config: &GameConfig) -> Result<()> {
    let mut rng = config.rng();
    let round = start_round(dict, config, &mut rng)?;

    let round = run_tui(App::new(round, rng))?;
    println!(
        "Found {}/{} words. Final score: {}",
        round.found_count(),
        round.total(),
        round.score()
    );
    Ok(())
}
