//! Letters and five-letter words
//!
//! A `Letter` is a single upper-case ASCII letter; a `Word` is exactly five of them.
//! Both normalise lower-case input, so comparisons are case-insensitive by construction.

use super::LetterCounts;
use std::fmt;

/// Number of letters in every word of the game
pub const WORD_LENGTH: usize = 5;

/// A single upper-case letter `A..=Z`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

impl Letter {
    /// Convert a character into a letter, upper-casing it
    ///
    /// Returns `None` for anything outside `a..=z` / `A..=Z`.
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::Letter;
    ///
    /// assert_eq!(Letter::from_char('q').map(Letter::as_char), Some('Q'));
    /// assert!(Letter::from_char('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Self((c as u8).to_ascii_uppercase()))
        } else {
            None
        }
    }

    /// The letter as an upper-case `char`
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Zero-based position in the alphabet (`A` = 0)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - b'A') as usize
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A five-letter word, stored upper-case
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    letters: [Letter; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LENGTH} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if text.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut letters = [Letter(b'A'); WORD_LENGTH];
        for (slot, c) in letters.iter_mut().zip(text.chars()) {
            *slot = Letter::from_char(c).ok_or(WordError::InvalidCharacters)?;
        }

        Ok(Self::from_letters(letters))
    }

    /// Build a word from five already-validated letters
    #[must_use]
    pub fn from_letters(letters: [Letter; WORD_LENGTH]) -> Self {
        let text = letters.iter().map(|l| l.as_char()).collect();
        Self { text, letters }
    }

    /// Get the word as an upper-case string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters in order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[Letter; WORD_LENGTH] {
        &self.letters
    }

    /// Get the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: Letter) -> bool {
        self.letters.contains(&letter)
    }

    /// Count how often each letter occurs in the word
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::from_word(self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
