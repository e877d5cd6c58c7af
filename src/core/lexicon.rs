//! Secret candidates and the dictionary of valid guesses

use super::{LetterCounts, Word};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

/// Startup configuration problems with the word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    EmptyCandidates,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCandidates => write!(f, "Secret word list is empty"),
        }
    }
}

impl std::error::Error for LexiconError {}

/// Words that may be picked as the secret, and words accepted as guesses
#[derive(Debug, Clone)]
pub struct Lexicon {
    candidates: Vec<Word>,
    dictionary: FxHashSet<Word>,
}

impl Lexicon {
    /// Build a lexicon from the two word lists
    ///
    /// Every candidate is also accepted as a guess, so `valid` may be empty.
    ///
    /// # Errors
    /// `EmptyCandidates` if there is nothing to pick a secret from.
    pub fn new(
        candidates: Vec<Word>,
        valid: impl IntoIterator<Item = Word>,
    ) -> Result<Self, LexiconError> {
        if candidates.is_empty() {
            return Err(LexiconError::EmptyCandidates);
        }

        let mut dictionary: FxHashSet<Word> = valid.into_iter().collect();
        dictionary.extend(candidates.iter().cloned());

        Ok(Self {
            candidates,
            dictionary,
        })
    }

    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    #[must_use]
    pub fn dictionary(&self) -> &FxHashSet<Word> {
        &self.dictionary
    }

    /// Pick the secret for a new session
    ///
    /// # Errors
    /// Never fails for a lexicon built by [`Lexicon::new`]; the error is
    /// forwarded from [`pick_secret`].
    pub fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, LexiconError> {
        pick_secret(&self.candidates, rng)
    }

    /// Check whether `word` is accepted as a guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        is_valid_guess(word, &self.dictionary)
    }
}

/// Choose a secret uniformly at random from `candidates`
///
/// # Errors
/// Returns `LexiconError::EmptyCandidates` if `candidates` is empty.
///
/// # Examples
/// ```
/// use ascii_wordle::core::{pick_secret, Word};
///
/// let candidates = vec![Word::new("crane").unwrap()];
/// let secret = pick_secret(&candidates, &mut rand::rng()).unwrap();
/// assert_eq!(secret.text(), "CRANE");
/// ```
pub fn pick_secret<R: Rng + ?Sized>(
    candidates: &[Word],
    rng: &mut R,
) -> Result<Word, LexiconError> {
    candidates
        .choose(rng)
        .cloned()
        .ok_or(LexiconError::EmptyCandidates)
}

/// Membership test for a guess
///
/// Words are upper-cased when constructed, so this is case-insensitive.
#[must_use]
pub fn is_valid_guess(word: &Word, dictionary: &FxHashSet<Word>) -> bool {
    dictionary.contains(word)
}

/// Count how often each letter occurs in `word`
#[must_use]
pub fn letter_frequencies(word: &Word) -> LetterCounts {
    word.letter_counts()
}
