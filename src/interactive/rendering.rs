//! TUI rendering with ratatui
//!
//! Board, keyboard, messages and a statistics overlay.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameState, GameStatus, LetterState};
use crate::output::{KEYBOARD_ROWS, stats_view};
use crate::stats::LengthStats;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W, S>(f: &mut Frame, app: &App<W, S>)
where
    W: crate::wordlists::WordSource,
    S: crate::storage::Store,
{
    let state = app.session.state();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, state, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_keyboard(f, state, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.input_mode == InputMode::Stats {
        let stats = stats_view(app.session.stats(), app.stats_view);
        render_stats_overlay(f, &stats, app.stats_view, state.max_guesses());
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn state_style(state: Option<LetterState>) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match state {
        Some(LetterState::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(LetterState::Present) => style.fg(Color::Black).bg(Color::Yellow),
        Some(LetterState::Absent) => style.fg(Color::White).bg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn tile(letter: char, state: Option<LetterState>) -> Span<'static> {
    Span::styled(format!(" {letter} "), state_style(state))
}

/// One line per row: scored guesses, the staging row, then blanks
fn board_lines(state: &GameState) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(state.max_guesses() * 2);
    for evaluation in state.evaluations() {
        let spans: Vec<Span> = evaluation
            .evaluations
            .iter()
            .flat_map(|e| [tile(e.letter, Some(e.state)), Span::raw(" ")])
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    let mut remaining = state.guesses_remaining();
    if state.status() == GameStatus::Playing && remaining > 0 {
        let typed: Vec<char> = state.current_guess().chars().collect();
        let spans: Vec<Span> = (0..state.word_length())
            .flat_map(|i| {
                let letter = typed.get(i).copied().unwrap_or('_');
                [
                    Span::styled(
                        format!(" {letter} "),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                ]
            })
            .collect();
        lines.push(Line::from(spans));
        lines.push(Line::default());
        remaining -= 1;
    }

    for _ in 0..remaining {
        let blank = " ·  ".repeat(state.word_length());
        lines.push(Line::styled(blank, Style::default().fg(Color::DarkGray)));
        lines.push(Line::default());
    }
    lines
}

fn render_board(f: &mut Frame, state: &GameState, area: Rect) {
    let board = Paragraph::new(board_lines(state))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " {} letters · {} guesses ",
                    state.word_length(),
                    state.max_guesses()
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, state: &GameState, area: Rect) {
    let keys = state.key_statuses();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row.chars().map(|c| tile(c, keys.get(c))).collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_messages<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status<W, S>(f: &mut Frame, app: &App<W, S>, area: Rect)
where
    W: crate::wordlists::WordSource,
    S: crate::storage::Store,
{
    let state = app.session.state();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match state.status() {
        GameStatus::Playing => format!("Guess {}/{}", state.guesses_used() + 1, state.max_guesses()),
        GameStatus::Won => "Won!".to_string(),
        GameStatus::Lost => format!("Answer: {}", state.answer()),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats = app.session.stats().for_length(state.word_length());
    let stats_text = format!(
        "Played: {} | Win: {}%",
        stats.games_played,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Playing => "Esc: Quit | Enter: Submit | Tab: Stats | ←→ length ↑↓ guesses | ^N new | ^R reset",
        InputMode::GameOver => "q: Quit | n: New Game | s: Share | Tab: Stats",
        InputMode::Stats => "Tab/Esc: Close | ←→ switch length",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

/// Rect of the given percentage size centered in `area`
fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

fn overlay_title(word_length: Option<usize>) -> String {
    match word_length {
        Some(length) => format!(" Statistics ({length} letters) ◀ ▶ "),
        None => " Statistics (all lengths) ◀ ▶ ".to_string(),
    }
}

fn render_stats_overlay(
    f: &mut Frame,
    stats: &LengthStats,
    word_length: Option<usize>,
    max_guesses: usize,
) {
    let area = centered(f.area(), 60, 70);
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(overlay_title(word_length))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = max_guesses.max(stats.max_guess_count());
    let mut constraints = vec![Constraint::Length(5)];
    constraints.extend((0..rows).map(|_| Constraint::Length(1)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let summary = vec![
        Line::from(vec![
            Span::raw("Played: "),
            Span::styled(
                stats.games_played.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("   Win %: "),
            Span::styled(
                stats.win_rate().to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!(
            "Current streak: {}   Best streak: {}",
            stats.current_streak, stats.best_streak
        )),
        Line::default(),
        Line::from("Guess distribution"),
    ];
    f.render_widget(
        Paragraph::new(summary).style(Style::default().fg(Color::White)),
        chunks[0],
    );

    let tallest = stats.max_bar();
    for guesses in 1..=rows {
        let wins = stats.wins_with(guesses);
        let percent = u16::try_from(wins.saturating_mul(100) / tallest).unwrap_or(100);
        let color = if wins > 0 { Color::Green } else { Color::DarkGray };
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(color))
            .percent(percent.min(100))
            .label(format!("{guesses}: {wins}"));
        f.render_widget(gauge, chunks[guesses]);
    }
}
