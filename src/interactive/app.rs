//! TUI application state and logic

use crate::config::{MAX_GUESSES, MIN_GUESSES};
use crate::core::{GameResult, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::output::formatters::{share_text, tries};
use crate::output::messages::{lose_message, random_win_message};
use crate::session::{EnterResult, Session};
use crate::storage::Store;
use crate::wordlists::WordSource;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<W, S> {
    pub session: Session<W, S>,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
    /// Word length shown in the stats overlay, `None` for all lengths
    pub stats_view: Option<usize>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    GameOver,
    Stats,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<W: WordSource, S: Store> App<W, S> {
    #[must_use]
    pub fn new(session: Session<W, S>) -> Self {
        Self::with_rng(session, StdRng::from_os_rng())
    }

    /// App with a fixed generator for the end-of-game messages
    #[must_use]
    pub fn with_rng(session: Session<W, S>, rng: StdRng) -> Self {
        let input_mode = if session.state().status().is_terminal() {
            InputMode::GameOver
        } else {
            InputMode::Playing
        };
        let mut app = Self {
            session,
            messages: Vec::new(),
            input_mode,
            should_quit: false,
            stats_view: None,
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {}.",
                app.session.state().word_length(),
                tries(app.session.state().max_guesses())
            ),
            MessageStyle::Info,
        );
        app
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

    pub fn submit(&mut self) {
        match self.session.enter() {
            EnterResult::Rejected(feedback) => {
                if let Some(text) = feedback.message() {
                    self.add_message(text, MessageStyle::Error);
                }
            }
            EnterResult::Scored => {}
            EnterResult::Finished(outcome) => {
                self.input_mode = InputMode::GameOver;
                match outcome.result {
                    GameResult::Won => {
                        let text = random_win_message(&mut self.rng);
                        self.add_message(
                            &format!("{text} Solved in {}.", tries(outcome.guesses_used)),
                            MessageStyle::Success,
                        );
                    }
                    GameResult::Lost => {
                        let text = lose_message(&outcome.answer, &mut self.rng);
                        self.add_message(&text, MessageStyle::Error);
                    }
                }
                self.add_message(
                    "Press 'n' for a new game, 's' to share, Tab for stats.",
                    MessageStyle::Info,
                );
            }
        }
    }

    pub fn new_game(&mut self) {
        match self.session.new_game() {
            Ok(()) => {
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn reset(&mut self) {
        match self.session.reset() {
            Ok(()) => {
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message("Game reset to 5 letters, 6 guesses.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Step word length or guess budget and start a new game with it
    pub fn adjust_settings(&mut self, length_step: isize, guesses_step: isize) {
        let state = self.session.state();
        let length = state
            .word_length()
            .saturating_add_signed(length_step)
            .clamp(MIN_WORD_LENGTH, MAX_WORD_LENGTH);
        let guesses = state
            .max_guesses()
            .saturating_add_signed(guesses_step)
            .clamp(MIN_GUESSES, MAX_GUESSES);
        if length == state.word_length() && guesses == state.max_guesses() {
            return;
        }

        match self.session.change_settings(length, guesses) {
            Ok(()) => {
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.add_message(
                    &format!("{length} letters, {}.", tries(guesses)),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Share card of the finished game, one message per line
    pub fn share(&mut self) {
        let state = self.session.state();
        if !state.status().is_terminal() {
            self.add_message("Finish the game to share it.", MessageStyle::Error);
            return;
        }
        let text = share_text(state.evaluations(), state.max_guesses());
        for line in text.lines().filter(|l| !l.is_empty()) {
            self.add_message(line, MessageStyle::Success);
        }
    }

    fn toggle_stats(&mut self) {
        self.input_mode = match self.input_mode {
            InputMode::Stats if self.session.state().status().is_terminal() => InputMode::GameOver,
            InputMode::Stats => InputMode::Playing,
            _ => {
                self.stats_view = Some(self.session.state().word_length());
                InputMode::Stats
            }
        };
    }

    /// Views the stats overlay cycles through: played lengths (and the
    /// current one), then all lengths
    #[must_use]
    pub fn stats_views(&self) -> Vec<Option<usize>> {
        let mut lengths = self.session.stats().available_lengths();
        let current = self.session.state().word_length();
        if !lengths.contains(&current) {
            lengths.push(current);
            lengths.sort_unstable();
        }
        lengths.into_iter().map(Some).chain([None]).collect()
    }

    /// Move the stats overlay to the next or previous view
    pub fn cycle_stats_view(&mut self, forward: bool) {
        let views = self.stats_views();
        let index = views.iter().position(|v| *v == self.stats_view).unwrap_or(0);
        let next = if forward {
            (index + 1) % views.len()
        } else {
            (index + views.len() - 1) % views.len()
        };
        self.stats_view = views[next];
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Stats => match key.code {
                KeyCode::Tab | KeyCode::Esc => self.toggle_stats(),
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Right | KeyCode::Down => self.cycle_stats_view(true),
                KeyCode::Left | KeyCode::Up => self.cycle_stats_view(false),
                _ => {}
            },
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('s') => self.share(),
                KeyCode::Tab => self.toggle_stats(),
                KeyCode::Left => self.adjust_settings(-1, 0),
                KeyCode::Right => self.adjust_settings(1, 0),
                KeyCode::Down => self.adjust_settings(0, -1),
                KeyCode::Up => self.adjust_settings(0, 1),
                _ => {}
            },
            InputMode::Playing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.reset();
                }
                KeyCode::Char(c) => self.session.type_letter(c),
                KeyCode::Backspace => self.session.backspace(),
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.toggle_stats(),
                KeyCode::Left => self.adjust_settings(-1, 0),
                KeyCode::Right => self.adjust_settings(1, 0),
                KeyCode::Down => self.adjust_settings(0, -1),
                KeyCode::Up => self.adjust_settings(0, 1),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<W: WordSource, S: Store>(app: App<W, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "tui loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, W, S>(terminal: &mut Terminal<B>, mut app: App<W, S>) -> Result<()>
where
    B: ratatui::backend::Backend,
    W: WordSource,
    S: Store,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
