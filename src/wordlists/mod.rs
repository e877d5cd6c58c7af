//! Word lists for the game
//!
//! The default lists are compiled into the binary; custom lists can be
//! loaded from plain text files.

mod embedded;
pub mod loader;

pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};

use crate::core::{Lexicon, LexiconError, Word};
use loader::words_from_slice;

/// Lexicon built from the embedded lists
///
/// `answers` replaces the embedded secret candidates when given.
/// `extra_allowed` is accepted on top of the embedded guess list.
///
/// # Errors
/// `LexiconError::EmptyCandidates` if `answers` holds no words.
///
/// # Examples
/// ```
/// use ascii_wordle::core::Word;
/// use ascii_wordle::wordlists::build_lexicon;
///
/// let lexicon = build_lexicon(None, vec![Word::new("zzzzz").unwrap()]).unwrap();
/// assert!(lexicon.is_valid_guess(&Word::new("slate").unwrap()));
/// assert!(lexicon.is_valid_guess(&Word::new("zzzzz").unwrap()));
/// ```
pub fn build_lexicon(
    answers: Option<Vec<Word>>,
    extra_allowed: Vec<Word>,
) -> Result<Lexicon, LexiconError> {
    let candidates = answers.unwrap_or_else(|| words_from_slice(ANSWERS));
    let mut allowed = words_from_slice(ALLOWED);
    allowed.extend(extra_allowed);
    Lexicon::new(candidates, allowed)
}
