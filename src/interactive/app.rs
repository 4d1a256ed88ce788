//! TUI application state and logic

use crate::commands::MAX_TOKEN_BYTES;
use crate::game::{Outcome, RoundState};
use crate::output::MessageStyle;
use crate::output::formatters::{outcome_message, shuffled_letters};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub round: RoundState,
    rng: StdRng,
    pub letters: Vec<u8>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

impl App {
    #[must_use]
    pub fn new(round: RoundState, mut rng: StdRng) -> Self {
        let letters = shuffled_letters(round.master(), &mut rng);
        let mut app = Self {
            round,
            rng,
            letters,
            input_buffer: String::new(),
            messages: Vec::new(),
            input_mode: InputMode::Guessing,
            should_quit: false,
        };

        app.add_message(
            "Find every word hidden in the letters below.",
            MessageStyle::Info,
        );
        app.add_message("Type a word and press Enter. Esc quits.", MessageStyle::Info);
        app.check_complete();
        app
    }

    /// Evaluate the typed guess and reshuffle the letters
    pub fn submit(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.trim().is_empty() {
            return;
        }

        let outcome = self.round.evaluate(guess.trim());
        if outcome == Outcome::Quit {
            self.should_quit = true;
            return;
        }

        let (text, style) = outcome_message(outcome);
        self.add_message(&format!("{}: {text}", guess.trim().to_uppercase()), style);

        self.letters = shuffled_letters(self.round.master(), &mut self.rng);
        self.check_complete();
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() && self.input_buffer.len() < MAX_TOKEN_BYTES {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn check_complete(&mut self) {
        if self.round.is_complete() && self.input_mode != InputMode::WinCelebration {
            self.input_mode = InputMode::WinCelebration;
            self.add_message(
                "🎉 CONGRATULATIONS! You found all the words! 🎉",
                MessageStyle::Success,
            );
            self.add_message("Press 'q' or Esc to leave.", MessageStyle::Info);
        }
    }
}

/// Run the TUI application
///
/// Returns the round as it stood when the player left.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<RoundState> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<RoundState> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                _ => match app.input_mode {
                    InputMode::WinCelebration => {
                        if matches!(key.code, KeyCode::Char('q') | KeyCode::Enter) {
                            app.should_quit = true;
                        }
                    }
                    InputMode::Guessing => match key.code {
                        KeyCode::Char(c) => app.push_char(c),
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit(),
                        _ => {}
                    },
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::game::Dictionary;
    use rand::SeedableRng;

    fn app(master: &str, words: &[&str]) -> App {
        let dict = Dictionary::build(words.iter().copied()).unwrap();
        let mut rng = StdRng::seed_from_u64(6);
        let round = RoundState::with_master(&dict, Word::new(master).unwrap(), &mut rng).unwrap();
        App::new(round, rng)
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
        app.submit();
    }

    #[test]
    fn typing_and_submitting_scores() {
        let mut app = app("HOUSE", &["house", "hose", "shoe"]);
        type_word(&mut app, "hose");

        assert_eq!(app.round.score(), 40);
        assert!(app.input_buffer.is_empty());
        assert!(app.messages.last().unwrap().text.contains("+40"));
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn push_char_filters_non_letters() {
        let mut app = app("HOUSE", &["house"]);
        for c in ['h', '1', ' ', 'o', 'é'] {
            app.push_char(c);
        }
        assert_eq!(app.input_buffer, "HO");
    }

    #[test]
    fn finding_everything_celebrates() {
        let mut app = app("LEVEL", &["level", "eel"]);
        type_word(&mut app, "eel");
        type_word(&mut app, "level");

        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.round.score(), 80);
    }

    #[test]
    fn quit_word_requests_exit() {
        let mut app = app("HOUSE", &["house"]);
        type_word(&mut app, "quit");
        assert!(app.should_quit);
    }

    #[test]
    fn empty_round_starts_in_celebration() {
        let app = app("HOUSE", &["cat"]);
        assert_eq!(app.input_mode, InputMode::WinCelebration);
    }

    #[test]
    fn letters_stay_a_permutation_of_master() {
        let mut app = app("TACOS", &["tacos", "cat"]);
        type_word(&mut app, "zzz");
        let mut letters = app.letters.clone();
        letters.sort_unstable();
        assert_eq!(letters, b"ACOST");
    }

    #[test]
    fn message_log_is_bounded() {
        let mut app = app("HOUSE", &["house"]);
        for _ in 0..10 {
            type_word(&mut app, "xyz");
        }
        assert_eq!(app.messages.len(), 5);
    }
}
