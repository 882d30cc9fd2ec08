//! Simple interactive CLI mode
//!
//! Line-based play without the TUI

use crate::core::GameResult;
use crate::output::formatters::{share_text, tries};
use crate::output::messages::{lose_message, random_win_message};
use crate::output::{format_evaluation, print_keyboard, print_stats};
use crate::session::{EnterResult, Session};
use crate::storage::Store;
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or if a new
/// game cannot be started.
pub fn run_simple<W: WordSource, S: Store>(session: &mut Session<W, S>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!("Type a guess and press enter. Tiles show how close you are:");
    println!("  {} right letter, right spot", "GREEN".black().on_green());
    println!("  {} in the word, wrong spot", "YELLOW".black().on_yellow());
    println!("  {} not in the word\n", "GRAY".white().on_bright_black());
    println!("Commands: :quit, :new, :keys, :stats, :share\n");

    let mut rng = rand::rng();
    print_intro(session);

    loop {
        let state = session.state();
        let prompt = if state.status().is_terminal() {
            "Play again? (yes/no)".to_string()
        } else {
            format!("Guess {}/{}", state.guesses_used() + 1, state.max_guesses())
        };

        let Some(line) = get_user_input(&mut input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };
        let line = line.to_lowercase();

        if session.state().status().is_terminal() {
            match line.as_str() {
                "yes" | "y" | ":new" => {
                    session.new_game()?;
                    println!("\n🔄 New game started!\n");
                    print_intro(session);
                    continue;
                }
                ":share" => {
                    let state = session.state();
                    println!("\n{}\n", share_text(state.evaluations(), state.max_guesses()));
                    continue;
                }
                ":stats" => {}
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        match line.as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" => {
                session.new_game()?;
                println!("\n🔄 New game started!\n");
                print_intro(session);
            }
            ":keys" => print_keyboard(session.state().key_statuses()),
            ":stats" => {
                let state = session.state();
                print_stats(session.stats(), Some(state.word_length()), state.max_guesses());
            }
            ":share" => println!("Finish the game to share it.\n"),
            word if word.chars().count() > session.state().word_length() => {
                println!("❌ {}\n", "Too many letters".bright_red());
            }
            word => {
                session.set_guess(word);
                match session.enter() {
                    EnterResult::Rejected(feedback) => {
                        if let Some(text) = feedback.message() {
                            println!("❌ {}\n", text.bright_red());
                        }
                        // clear the row so the next line starts fresh
                        session.set_guess("");
                    }
                    EnterResult::Scored => print_board(session),
                    EnterResult::Finished(outcome) => {
                        print_board(session);
                        match outcome.result {
                            GameResult::Won => println!(
                                "\n🎉 {} Solved in {}.\n",
                                random_win_message(&mut rng).bright_green().bold(),
                                tries(outcome.guesses_used)
                            ),
                            GameResult::Lost => println!(
                                "\n{}\n",
                                lose_message(&outcome.answer, &mut rng).bright_yellow()
                            ),
                        }
                    }
                }
            }
        }
    }
}

fn print_intro<W: WordSource, S: Store>(session: &Session<W, S>) {
    let state = session.state();
    println!(
        "Guess the {}-letter word in {}.\n",
        state.word_length(),
        tries(state.max_guesses())
    );
    if !state.guesses().is_empty() {
        print_board(session);
    }
}

fn print_board<W: WordSource, S: Store>(session: &Session<W, S>) {
    println!();
    for evaluation in session.state().evaluations() {
        println!("  {}", format_evaluation(evaluation));
    }
    println!();
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
