//! Formatting utilities for terminal output

use crate::core::{Feedback, Letter, Verdict, Word};
use colored::{ColoredString, Colorize};

/// A letter as a colored tile, e.g. " C " on green
#[must_use]
pub fn verdict_tile(letter: Letter, verdict: Verdict) -> ColoredString {
    let tile = format!(" {letter} ").black().bold();
    match verdict {
        Verdict::Hit => tile.on_green(),
        Verdict::Present => tile.on_yellow(),
        Verdict::Miss => tile.white().on_bright_black(),
    }
}

/// A scored guess as five adjacent tiles
#[must_use]
pub fn row_tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .letters()
        .iter()
        .zip(feedback.verdicts())
        .map(|(&letter, &verdict)| verdict_tile(letter, verdict).to_string())
        .collect()
}

/// Remaining-attempts indicator, e.g. "●●○○○○"
#[must_use]
pub fn attempts_bar(used: usize, total: usize) -> String {
    let used = used.min(total);
    format!("{}{}", "●".repeat(used), "○".repeat(total - used))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_show_letters_in_order() {
        colored::control::set_override(false);
        let guess = Word::new("crate").unwrap();
        let feedback: Feedback = "GGG-G".parse().unwrap();
        assert_eq!(row_tiles(&guess, &feedback), " C  R  A  T  E ");
    }

    #[test]
    fn tile_text_is_padded_letter() {
        colored::control::set_override(false);
        let letter = Letter::from_char('q').unwrap();
        assert_eq!(verdict_tile(letter, Verdict::Miss).to_string(), " Q ");
    }

    #[test]
    fn attempts_bar_fills_used() {
        assert_eq!(attempts_bar(0, 6), "○○○○○○");
        assert_eq!(attempts_bar(2, 6), "●●○○○○");
        assert_eq!(attempts_bar(9, 6), "●●●●●●");
    }
}
