//! Keystroke accumulation for the active row

use super::{Lexicon, Letter, WORD_LENGTH, Word};
use std::fmt;

/// Why a row could not be submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    TooShort { len: usize },
    NotInLexicon(Word),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { .. } => write!(f, "Not enough letters"),
            Self::NotInLexicon(word) => write!(f, "{word} is not in the word list"),
        }
    }
}

impl std::error::Error for SubmitError {}

/// Up to five letters typed for the current row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowInputBuffer {
    letters: Vec<Letter>,
}

impl RowInputBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            letters: Vec::with_capacity(WORD_LENGTH),
        }
    }

    /// Append a letter
    ///
    /// Returns the column it landed in, or `None` if the row is already full
    /// (the key is swallowed).
    pub fn insert(&mut self, letter: Letter) -> Option<usize> {
        if self.is_full() {
            return None;
        }
        self.letters.push(letter);
        Some(self.letters.len() - 1)
    }

    /// Remove the most recently typed letter
    ///
    /// Returns the column that was cleared, or `None` if there was nothing to
    /// delete.
    pub fn delete_last(&mut self) -> Option<usize> {
        self.letters.pop().map(|_| self.letters.len())
    }

    /// Validate the typed letters as a guess
    ///
    /// The buffer is left as it was either way.
    ///
    /// # Errors
    /// `TooShort` when fewer than five letters are typed, `NotInLexicon` when
    /// the word is not a valid guess.
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::{Letter, Lexicon, RowInputBuffer, SubmitError, Word};
    ///
    /// let crane = Word::new("crane").unwrap();
    /// let lexicon = Lexicon::new(vec![crane.clone()], vec![crane.clone()]).unwrap();
    ///
    /// let mut buffer = RowInputBuffer::new();
    /// for c in "cra".chars() {
    ///     buffer.insert(Letter::from_char(c).unwrap());
    /// }
    /// assert_eq!(buffer.submit(&lexicon), Err(SubmitError::TooShort { len: 3 }));
    ///
    /// for c in "ne".chars() {
    ///     buffer.insert(Letter::from_char(c).unwrap());
    /// }
    /// assert_eq!(buffer.submit(&lexicon), Ok(crane));
    /// ```
    pub fn submit(&self, lexicon: &Lexicon) -> Result<Word, SubmitError> {
        let letters: [Letter; WORD_LENGTH] = self
            .letters
            .as_slice()
            .try_into()
            .map_err(|_| SubmitError::TooShort {
                len: self.letters.len(),
            })?;

        let word = Word::from_letters(letters);
        if lexicon.is_valid_guess(&word) {
            Ok(word)
        } else {
            Err(SubmitError::NotInLexicon(word))
        }
    }

    /// Empty the buffer for the next row
    pub fn clear(&mut self) {
        self.letters.clear();
    }

    #[must_use]
    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= WORD_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    fn typed(text: &str) -> RowInputBuffer {
        let mut buffer = RowInputBuffer::new();
        for c in text.chars() {
            buffer.insert(letter(c));
        }
        buffer
    }

    fn lexicon() -> Lexicon {
        let words = ["crane", "crate"].map(|w| Word::new(w).unwrap());
        Lexicon::new(words.to_vec(), words).unwrap()
    }

    #[test]
    fn insert_reports_columns() {
        let mut buffer = RowInputBuffer::new();
        assert_eq!(buffer.insert(letter('a')), Some(0));
        assert_eq!(buffer.insert(letter('b')), Some(1));
        assert_eq!(buffer.len(), 2);
    }

    #[test]
    fn insert_caps_at_five() {
        let buffer = typed("abcdefg");
        assert_eq!(buffer.len(), 5);
        assert!(buffer.is_full());
        let text: String = buffer.letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "ABCDE");
    }

    #[test]
    fn insert_into_full_buffer_is_ignored() {
        let mut buffer = typed("crane");
        let before = buffer.clone();
        assert_eq!(buffer.insert(letter('s')), None);
        assert_eq!(buffer, before);
    }

    #[test]
    fn delete_last_removes_most_recent() {
        let mut buffer = typed("cra");
        assert_eq!(buffer.delete_last(), Some(2));
        let text: String = buffer.letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(text, "CR");
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut buffer = RowInputBuffer::new();
        assert_eq!(buffer.delete_last(), None);
        assert!(buffer.is_empty());
    }

    #[test]
    fn delete_more_than_typed_leaves_empty() {
        let mut buffer = typed("ab");
        for _ in 0..6 {
            buffer.delete_last();
        }
        assert!(buffer.is_empty());
    }

    #[test]
    fn submit_short_row_fails_without_mutation() {
        let buffer = typed("cran");
        let before = buffer.clone();
        assert_eq!(buffer.submit(&lexicon()), Err(SubmitError::TooShort { len: 4 }));
        assert_eq!(buffer, before);
    }

    #[test]
    fn submit_unknown_word_fails() {
        let buffer = typed("zzzzz");
        assert_eq!(
            buffer.submit(&lexicon()),
            Err(SubmitError::NotInLexicon(Word::new("zzzzz").unwrap()))
        );
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn submit_known_word_keeps_buffer() {
        let buffer = typed("crate");
        assert_eq!(buffer.submit(&lexicon()), Ok(Word::new("crate").unwrap()));
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn clear_empties_buffer() {
        let mut buffer = typed("crate");
        buffer.clear();
        assert!(buffer.is_empty());
    }

    #[test]
    fn error_messages() {
        assert_eq!(SubmitError::TooShort { len: 2 }.to_string(), "Not enough letters");
        assert_eq!(
            SubmitError::NotInLexicon(Word::new("zzzzz").unwrap()).to_string(),
            "ZZZZZ is not in the word list"
        );
    }
}
