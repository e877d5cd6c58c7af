//! Scoring a guess against the secret
//!
//! Scoring consumes a per-letter budget (`LetterCounts`) so that a letter is
//! never credited more often than it occurs in the secret.

use super::{Feedback, LetterCounts, Verdict, WORD_LENGTH, Word};
use std::fmt;

/// How duplicate letters compete for the letter budget
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// Reserve every exact-position match first, then hand out Present
    /// verdicts left to right from what is left.
    #[default]
    Standard,
    /// One left-to-right pass. An early Present can use up the budget a later
    /// exact match needed, which then scores as a Miss.
    SinglePass,
}

impl fmt::Display for ScoringPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => f.write_str("standard"),
            Self::SinglePass => f.write_str("single-pass"),
        }
    }
}

/// Score `guess` against `secret`, consuming `counts`
///
/// `counts` must start as the secret's letter counts; it is left holding the
/// budget that no verdict claimed.
///
/// # Examples
/// ```
/// use ascii_wordle::core::{evaluate, ScoringPolicy, Word};
///
/// let secret = Word::new("crane").unwrap();
/// let guess = Word::new("crate").unwrap();
/// let mut counts = secret.letter_counts();
///
/// let feedback = evaluate(&guess, &secret, &mut counts, ScoringPolicy::Standard);
/// assert_eq!(feedback.to_emoji(), "🟩🟩🟩⬛🟩");
/// ```
#[must_use]
pub fn evaluate(
    guess: &Word,
    secret: &Word,
    counts: &mut LetterCounts,
    policy: ScoringPolicy,
) -> Feedback {
    match policy {
        ScoringPolicy::Standard => evaluate_standard(guess, secret, counts),
        ScoringPolicy::SinglePass => evaluate_single_pass(guess, secret, counts),
    }
}

fn evaluate_standard(guess: &Word, secret: &Word, counts: &mut LetterCounts) -> Feedback {
    let mut verdicts = [Verdict::Miss; WORD_LENGTH];
    let pairs = guess.letters().iter().zip(secret.letters());

    // First pass: exact matches
    for (verdict, (&g, &s)) in verdicts.iter_mut().zip(pairs) {
        if g == s && counts.take(g) {
            *verdict = Verdict::Hit;
        }
    }

    // Second pass: misplaced letters from the remaining budget
    for (verdict, &g) in verdicts.iter_mut().zip(guess.letters()) {
        if *verdict == Verdict::Miss && secret.contains(g) && counts.take(g) {
            *verdict = Verdict::Present;
        }
    }

    Feedback::new(verdicts)
}

fn evaluate_single_pass(guess: &Word, secret: &Word, counts: &mut LetterCounts) -> Feedback {
    let mut verdicts = [Verdict::Miss; WORD_LENGTH];
    let pairs = guess.letters().iter().zip(secret.letters());

    for (verdict, (&g, &s)) in verdicts.iter_mut().zip(pairs) {
        if !secret.contains(g) || !counts.take(g) {
            continue;
        }
        *verdict = if g == s { Verdict::Hit } else { Verdict::Present };
    }

    Feedback::new(verdicts)
}
