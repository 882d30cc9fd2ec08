//! Colored terminal output for the line-based commands

use super::formatters::create_progress_bar;
use crate::core::{GuessEvaluation, KeyStatusMap, LetterState};
use crate::stats::{GameStats, LengthStats};
use colored::{ColoredString, Colorize};

/// QWERTY rows of the on-screen keyboard
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {letter} ");
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render one scored guess as colored tiles
#[must_use]
pub fn format_evaluation(evaluation: &GuessEvaluation) -> String {
    evaluation
        .evaluations
        .iter()
        .map(|e| tile(e.letter, Some(e.state)).to_string())
        .collect()
}

/// Print the keyboard colored by best-known letter state
pub fn print_keyboard(keys: &KeyStatusMap) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .chars()
            .map(|c| tile(c, keys.get(c)).to_string())
            .collect();
        println!("  {}{line}", " ".repeat(indent * 2));
    }
}

fn print_length_stats(stats: &LengthStats, max_guesses: usize) {
    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games_played);
    println!(
        "   Win rate:         {}",
        format!("{}%", stats.win_rate()).bright_green().bold()
    );
    println!(
        "   Current streak:   {}",
        stats.current_streak.to_string().bright_magenta()
    );
    println!(
        "   Best streak:      {}",
        stats.best_streak.to_string().bright_magenta()
    );

    println!("\n📈 {}", "Guess distribution:".bright_cyan().bold());
    let rows = max_guesses.max(stats.max_guess_count());
    let tallest = f64::from(stats.max_bar());
    for guesses in 1..=rows {
        let wins = stats.wins_with(guesses);
        let bar = create_progress_bar(f64::from(wins), tallest, 30);
        let bar = if wins > 0 { bar.green() } else { bar.bright_black() };
        println!("   {guesses}: {bar} {wins}");
    }
}

/// Counters for one word length, or folded across all of them
#[must_use]
pub fn stats_view(stats: &GameStats, length: Option<usize>) -> LengthStats {
    length.map_or_else(|| stats.aggregate(), |l| stats.for_length(l))
}

/// Print statistics overall, or for one word length
pub fn print_stats(stats: &GameStats, length: Option<usize>, max_guesses: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    match length {
        Some(length) => println!(
            " {} {} ",
            "STATISTICS".bright_cyan().bold(),
            format!("({length} letters)").bright_yellow()
        ),
        None => println!(" {} ", "STATISTICS (all lengths)".bright_cyan().bold()),
    }
    println!("{}", "═".repeat(60).cyan());

    let view = stats_view(stats, length);
    if view.games_played == 0 {
        println!("\n   No games played yet.");
        return;
    }
    print_length_stats(&view, max_guesses);

    let lengths = stats.available_lengths();
    if length.is_none() && !lengths.is_empty() {
        println!("\n🔤 {}", "By word length:".bright_cyan().bold());
        for l in lengths {
            let s = stats.for_length(l);
            println!(
                "   {l} letters: {} played, {}% won, best streak {}",
                s.games_played,
                s.win_rate(),
                s.best_streak
            );
        }
    }
}
