//! Terminal output formatting
//!
//! Display utilities for the line-based commands, share text and
//! end-of-game messages.

pub mod display;
pub mod formatters;
pub mod messages;

pub use display::{KEYBOARD_ROWS, format_evaluation, print_keyboard, print_stats, stats_view};
pub use formatters::share_text;
