//! Per-letter budget used while scoring a guess

use super::{Letter, Word};
use rustc_hash::FxHashMap;

/// Remaining count of each letter available for Hit/Present verdicts
///
/// Built once from the secret. Scoring works on a clone so the original
/// snapshot can seed every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts(FxHashMap<Letter, u8>);

impl LetterCounts {
    /// Count the occurrences of each letter in `word`
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::{Letter, Word};
    ///
    /// let counts = Word::new("speed").unwrap().letter_counts();
    /// assert_eq!(counts.get(Letter::from_char('e').unwrap()), 2);
    /// assert_eq!(counts.total(), 5);
    /// ```
    #[must_use]
    pub fn from_word(word: &Word) -> Self {
        let mut counts = FxHashMap::default();
        for &letter in word.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Remaining budget for `letter` (0 when absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: Letter) -> u8 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    /// Consume one unit of budget for `letter`
    ///
    /// Returns `false` and leaves the table untouched if none is left.
    pub fn take(&mut self, letter: Letter) -> bool {
        match self.0.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Sum of all remaining counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().map(|&count| usize::from(count)).sum()
    }

    /// Number of distinct letters tracked
    #[must_use]
    pub fn distinct(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn counts_duplicates() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts.get(letter('s')), 1);
        assert_eq!(counts.get(letter('p')), 1);
        assert_eq!(counts.get(letter('e')), 2);
        assert_eq!(counts.get(letter('d')), 1);
        assert_eq!(counts.get(letter('z')), 0);
        assert_eq!(counts.distinct(), 4);
    }

    #[test]
    fn counts_always_sum_to_five() {
        for word in ["crane", "speed", "aaaaa", "apple", "eerie"] {
            assert_eq!(Word::new(word).unwrap().letter_counts().total(), 5);
        }
    }

    #[test]
    fn take_decrements_until_exhausted() {
        let mut counts = Word::new("speed").unwrap().letter_counts();
        assert!(counts.take(letter('e')));
        assert!(counts.take(letter('e')));
        assert!(!counts.take(letter('e')));
        assert_eq!(counts.get(letter('e')), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn take_missing_letter_is_noop() {
        let mut counts = Word::new("crane").unwrap().letter_counts();
        let before = counts.clone();
        assert!(!counts.take(letter('z')));
        assert_eq!(counts, before);
    }

    #[test]
    fn clone_is_independent_of_base() {
        let base = Word::new("crane").unwrap().letter_counts();
        let mut working = base.clone();
        working.take(letter('c'));
        assert_eq!(base.get(letter('c')), 1);
        assert_eq!(working.get(letter('c')), 0);
    }
}
