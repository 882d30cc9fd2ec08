//! End-of-game messages

use rand::Rng;
use rand::seq::IndexedRandom;

pub const WIN_MESSAGES: &[&str] = &[
    "Great job! ✨",
    "Magnificent! 🎉",
    "You're on fire! 💪",
    "Splendid! 🌟",
    "Are you cheating? 🎯",
    "Genius! 🚀",
];

pub const LOSE_MESSAGES: &[&str] = &[
    "Nice try! The word was {answer}. You'll get it next time! 💪",
    "So close! It was {answer}. Keep going! 🌟",
    "That's okay! The answer was {answer}. Try again! ✨",
];

#[must_use]
pub fn random_win_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    WIN_MESSAGES.choose(rng).copied().unwrap_or("You won!")
}

#[must_use]
pub fn lose_message<R: Rng + ?Sized>(answer: &str, rng: &mut R) -> String {
    LOSE_MESSAGES
        .choose(rng)
        .copied()
        .unwrap_or("The word was {answer}.")
        .replace("{answer}", answer)
}
