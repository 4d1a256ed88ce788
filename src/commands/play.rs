//! Text-mode game loop
//!
//! Render a frame, read one guess, evaluate it, repeat. The loop is generic
//! over its input and output so it can be driven from tests.

use crate::game::{Outcome, RoundState};
use crate::output::formatters::{outcome_message, shuffled_letters};
use crate::output::{log, render_frame, render_summary};
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use rand::Rng;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Longest guess token kept, in bytes
pub const MAX_TOKEN_BYTES: usize = 99;

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    /// Every target was found
    Won,
    /// The player typed the quit token
    Quit,
    /// Standard input reached end of file or failed for good
    InputClosed,
}

/// Result of a played round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaySummary {
    pub end: RoundEnd,
    pub score: u32,
    pub found: usize,
    pub total: usize,
    pub turns: usize,
}

/// Presentation settings for the text loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOptions {
    /// Pause after printing feedback
    pub pause: Duration,
    /// Clear the screen before each frame
    pub clear_screen: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            pause: crate::config::DEFAULT_PAUSE,
            clear_screen: true,
        }
    }
}

/// Splits buffered input into whitespace-delimited tokens
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, at most [`MAX_TOKEN_BYTES`] long
    ///
    /// Input is split on ASCII whitespace as raw bytes. Bytes that are not
    /// valid UTF-8 are replaced, so a malformed token is still a token. A run
    /// longer than [`MAX_TOKEN_BYTES`] comes back as several tokens.
    ///
    /// Returns `Ok(None)` at end of input.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying reader.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            for raw in line
                .split(u8::is_ascii_whitespace)
                .filter(|raw| !raw.is_empty())
            {
                let text = String::from_utf8_lossy(raw);
                self.pending
                    .extend(split_token(&text).into_iter().map(str::to_string));
            }
        }
    }
}

/// Cut `token` into pieces of at most [`MAX_TOKEN_BYTES`], on char boundaries
fn split_token(token: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = token;
    while !rest.is_empty() {
        let mut end = rest.len().min(MAX_TOKEN_BYTES);
        while !rest.is_char_boundary(end) {
            end -= 1;
        }
        let (head, tail) = rest.split_at(end);
        pieces.push(head);
        rest = tail;
    }
    pieces
}

/// Play one round in text mode
///
/// Returns when every target is found, the player quits, or input ends.
/// A read error is reported and closes the round like end of input.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn run_play<R, W, G>(
    round: &mut RoundState,
    input: R,
    out: &mut W,
    rng: &mut G,
    options: PlayOptions,
) -> io::Result<PlaySummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut tokens = TokenReader::new(input);
    let mut last: Option<Outcome> = None;
    let mut turns = 0;

    let end = loop {
        if options.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        let letters = shuffled_letters(round.master(), rng);
        render_frame(out, round, &letters, last)?;

        if round.is_complete() {
            break RoundEnd::Won;
        }

        write!(out, "\nTry a word (or 'quit' to exit): ")?;
        out.flush()?;

        let guess = match tokens.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break RoundEnd::InputClosed,
            Err(e) => {
                log::error(&format!("Input error: {e}"));
                break RoundEnd::InputClosed;
            }
        };

        turns += 1;
        let outcome = round.evaluate(&guess);
        if outcome == Outcome::Quit {
            break RoundEnd::Quit;
        }

        let (message, _) = outcome_message(outcome);
        writeln!(out, "{message}")?;
        out.flush()?;
        if !options.pause.is_zero() {
            thread::sleep(options.pause);
        }
        last = Some(outcome);
    };

    render_summary(out, end, round.score())?;
    out.flush()?;

    Ok(PlaySummary {
        end,
        score: round.score(),
        found: round.found_count(),
        total: round.total(),
        turns,
    })
}
