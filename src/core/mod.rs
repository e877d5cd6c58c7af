//! Core game logic
//!
//! Words, scoring, the row input buffer and the session state machine.
//! Nothing in here touches the terminal; front-ends feed `Key`s in and draw
//! the `SessionEvent`s that come back.

mod buffer;
mod counts;
mod evaluator;
mod lexicon;
mod session;
mod summary;
mod verdict;
mod word;

pub use buffer::{RowInputBuffer, SubmitError};
pub use counts::LetterCounts;
pub use evaluator::{ScoringPolicy, evaluate};
pub use lexicon::{Lexicon, LexiconError, is_valid_guess, letter_frequencies, pick_secret};
pub use session::{
    CellEvent, CellMark, GameSession, Key, MAX_ROWS, RowRecord, SessionError, SessionEvent,
    SessionState,
};
pub use summary::ResultSummary;
pub use verdict::{Feedback, Verdict};
pub use word::{Letter, WORD_LENGTH, Word, WordError};
