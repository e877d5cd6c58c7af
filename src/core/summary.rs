//! End-of-game summary and share text

use super::{Feedback, Word};
use std::fmt;

/// Remarks for a win on rows 1 through 6
const WIN_REMARKS: [&str; 6] = [
    "GENIUS",
    "MAGNIFICENT",
    "IMPRESSIVE",
    "SPLENDID",
    "GREAT",
    "PHEW",
];

/// Final outcome of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSummary {
    pub won: bool,
    /// Rows played, 1..=6
    pub attempts_used: usize,
    pub secret: Word,
    pub feedback_history: Vec<Feedback>,
}

impl ResultSummary {
    /// The shareable block: a header, a blank line, one feedback row per line
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::{Feedback, ResultSummary, Word};
    ///
    /// let summary = ResultSummary {
    ///     won: true,
    ///     attempts_used: 2,
    ///     secret: Word::new("crane").unwrap(),
    ///     feedback_history: vec!["GGG-G".parse().unwrap(), Feedback::SOLVED],
    /// };
    /// assert_eq!(summary.share_text(), "Wordle 2/6\n\n🟩🟩🟩⬛🟩\n🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn share_text(&self) -> String {
        let rows: Vec<String> = self.feedback_history.iter().map(Feedback::to_emoji).collect();
        format!("Wordle {}/6\n\n{}", self.attempts_used, rows.join("\n"))
    }

    /// Banner shown when the game ends; a loss reveals the secret
    #[must_use]
    pub fn remark(&self) -> &str {
        if self.won {
            WIN_REMARKS
                .get(self.attempts_used.saturating_sub(1))
                .copied()
                .unwrap_or("SOLVED")
        } else {
            self.secret.text()
        }
    }
}

impl fmt::Display for ResultSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.share_text())
    }
}
