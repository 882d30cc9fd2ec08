//! Formatting utilities for terminal output

use crate::core::GuessEvaluation;

/// Title used on the share card
pub const SHARE_TITLE: &str = "Wordle";

/// Share card: a title line, a blank line, then one emoji row per guess
///
/// # Examples
/// ```
/// use wordle_game::core::evaluate;
/// use wordle_game::output::formatters::share_text;
///
/// let rows = [evaluate("TRACE", "CRANE").unwrap(), evaluate("CRANE", "CRANE").unwrap()];
/// assert_eq!(share_text(&rows, 6), "Wordle 2/6\n\n⬛🟩🟩🟨🟩\n🟩🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn share_text(evaluations: &[GuessEvaluation], max_guesses: usize) -> String {
    let mut lines = vec![
        format!("{SHARE_TITLE} {}/{max_guesses}", evaluations.len()),
        String::new(),
    ];
    lines.extend(evaluations.iter().map(GuessEvaluation::to_emoji));
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// "1 try" / "3 tries"
#[must_use]
pub fn tries(count: usize) -> String {
    if count == 1 {
        "1 try".to_string()
    } else {
        format!("{count} tries")
    }
}
