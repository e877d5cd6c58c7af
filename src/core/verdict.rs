//! Per-letter verdicts and a row's feedback
//!
//! A row of feedback is five verdicts, one per guess position:
//! - Hit: letter in the correct position (🟩)
//! - Present: letter in the word elsewhere (🟨)
//! - Miss: letter absent or its budget already used (⬛)

use super::WORD_LENGTH;
use std::fmt;

/// Outcome for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Hit,
    Present,
    Miss,
}

impl Verdict {
    /// Symbol used in the shareable feedback string
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => '🟩',
            Self::Present => '🟨',
            Self::Miss => '⬛',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts the emoji squares as well as `G`/`Y`/`-` shorthands.
    #[must_use]
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            'G' | 'g' | '🟩' => Some(Self::Hit),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬛' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// The five verdicts produced for one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Verdict; WORD_LENGTH]);

impl Feedback {
    /// All hits (solved row)
    pub const SOLVED: Self = Self([Verdict::Hit; WORD_LENGTH]);

    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is a Hit
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&v| v == Verdict::Hit)
    }


    /// Render as the compact feedback string, e.g. "🟩🟨⬛⬛🟩"
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::Feedback;
    ///
    /// let feedback: Feedback = "GY--G".parse().unwrap();
    /// assert_eq!(feedback.to_emoji(), "🟩🟨⬛⬛🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.symbol()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        let mut verdicts = [Verdict::Miss; WORD_LENGTH];
        for (slot, &c) in verdicts.iter_mut().zip(&symbols) {
            *slot = Verdict::from_symbol(c)
                .ok_or_else(|| format!("Invalid feedback string: {s}"))?;
        }
        Ok(Self(verdicts))
    }
}
