//! Game session state machine
//!
//! A session starts in `Active { row: 0 }` and consumes key events one at a
//! time. Every accepted submission is scored against a fresh copy of the
//! secret's letter counts, recorded, and either ends the game or opens the
//! next row. The returned events tell a front-end which board cells changed.

use super::{
    Feedback, Letter, LetterCounts, Lexicon, ResultSummary, RowInputBuffer, ScoringPolicy,
    SubmitError, Verdict, WORD_LENGTH, Word, evaluate,
};
use std::fmt;

/// Number of rows (guesses) in a game
pub const MAX_ROWS: usize = 6;

/// A classified key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Letter(Letter),
    Backspace,
    Enter,
    Other,
}

impl Key {
    /// Classify a typed character; anything that is not a letter is `Other`
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Letter::from_char(c).map_or(Self::Other, Self::Letter)
    }
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active { row: usize },
    Won { row: usize },
    Lost,
}

impl SessionState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active { .. })
    }
}

/// What a board cell should show after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellMark {
    Empty,
    Pending(Letter),
    Scored(Letter, Verdict),
}

/// A single board cell update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEvent {
    pub row: usize,
    pub col: usize,
    pub mark: CellMark,
}

/// Notification for the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Cell(CellEvent),
    Rejected(SubmitError),
    Finished(ResultSummary),
}

/// Errors from driving a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    GameOver,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One completed row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowRecord {
    pub guess: Word,
    pub feedback: Feedback,
}

/// A single game from first keystroke to win or loss
#[derive(Debug, Clone)]
pub struct GameSession {
    lexicon: Lexicon,
    secret: Word,
    base_counts: LetterCounts,
    policy: ScoringPolicy,
    buffer: RowInputBuffer,
    history: Vec<RowRecord>,
    state: SessionState,
}

impl GameSession {
    /// Start a session with a known secret
    #[must_use]
    pub fn new(lexicon: Lexicon, secret: Word, policy: ScoringPolicy) -> Self {
        let base_counts = secret.letter_counts();
        log::debug!("new session ({policy} scoring)");

        Self {
            lexicon,
            secret,
            base_counts,
            policy,
            buffer: RowInputBuffer::new(),
            history: Vec::with_capacity(MAX_ROWS),
            state: SessionState::Active { row: 0 },
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn buffer(&self) -> &RowInputBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn history(&self) -> &[RowRecord] {
        &self.history
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    fn active_row(&self) -> Result<usize, SessionError> {
        match self.state {
            SessionState::Active { row } => Ok(row),
            SessionState::Won { .. } | SessionState::Lost => Err(SessionError::GameOver),
        }
    }

    /// Feed one key into the session
    ///
    /// # Errors
    /// `SessionError::GameOver` once the session has been won or lost.
    ///
    /// # Examples
    /// ```
    /// use ascii_wordle::core::{GameSession, Key, Lexicon, ScoringPolicy, SessionState, Word};
    ///
    /// let crane = Word::new("crane").unwrap();
    /// let lexicon = Lexicon::new(vec![crane.clone()], vec![crane.clone()]).unwrap();
    /// let mut session = GameSession::new(lexicon, crane, ScoringPolicy::Standard);
    ///
    /// for c in "crane".chars() {
    ///     session.handle_key(Key::from_char(c)).unwrap();
    /// }
    /// session.handle_key(Key::Enter).unwrap();
    /// assert_eq!(session.state(), SessionState::Won { row: 0 });
    /// ```
    pub fn handle_key(&mut self, key: Key) -> Result<Vec<SessionEvent>, SessionError> {
        let events: Vec<SessionEvent> = match key {
            Key::Letter(letter) => self.type_letter(letter)?.into_iter().collect(),
            Key::Backspace => self.delete_letter()?.into_iter().collect(),
            Key::Enter => self.submit()?,
            Key::Other => {
                self.active_row()?;
                Vec::new()
            }
        };
        Ok(events)
    }

    /// Type a letter into the active row
    ///
    /// Returns `None` when the row is already full.
    ///
    /// # Errors
    /// `SessionError::GameOver` once the session has ended.
    pub fn type_letter(&mut self, letter: Letter) -> Result<Option<SessionEvent>, SessionError> {
        let row = self.active_row()?;
        Ok(self.buffer.insert(letter).map(|col| {
            SessionEvent::Cell(CellEvent {
                row,
                col,
                mark: CellMark::Pending(letter),
            })
        }))
    }

    /// Delete the last letter of the active row
    ///
    /// Returns `None` when the row is empty.
    ///
    /// # Errors
    /// `SessionError::GameOver` once the session has ended.
    pub fn delete_letter(&mut self) -> Result<Option<SessionEvent>, SessionError> {
        let row = self.active_row()?;
        Ok(self.buffer.delete_last().map(|col| {
            SessionEvent::Cell(CellEvent {
                row,
                col,
                mark: CellMark::Empty,
            })
        }))
    }

    /// Submit the active row
    ///
    /// A rejected row produces a single `Rejected` event and leaves the
    /// session untouched.
    ///
    /// # Errors
    /// `SessionError::GameOver` once the session has ended.
    pub fn submit(&mut self) -> Result<Vec<SessionEvent>, SessionError> {
        let row = self.active_row()?;

        let guess = match self.buffer.submit(&self.lexicon) {
            Ok(guess) => guess,
            Err(err) => {
                log::debug!("row {row} rejected: {err}");
                return Ok(vec![SessionEvent::Rejected(err)]);
            }
        };

        // Each row gets its own copy of the letter budget
        let mut counts = self.base_counts.clone();
        let feedback = evaluate(&guess, &self.secret, &mut counts, self.policy);

        let mut events: Vec<SessionEvent> = guess
            .letters()
            .iter()
            .zip(feedback.verdicts())
            .enumerate()
            .map(|(col, (&letter, &verdict))| {
                SessionEvent::Cell(CellEvent {
                    row,
                    col,
                    mark: CellMark::Scored(letter, verdict),
                })
            })
            .collect();
        debug_assert_eq!(events.len(), WORD_LENGTH);

        log::debug!("row {row}: {guess} -> {feedback}");
        self.history.push(RowRecord { guess, feedback });

        self.state = if feedback.is_solved() {
            SessionState::Won { row }
        } else if row + 1 < MAX_ROWS {
            self.buffer.clear();
            SessionState::Active { row: row + 1 }
        } else {
            SessionState::Lost
        };
        log::debug!("session state: {:?}", self.state);

        if let Some(summary) = self.summary() {
            events.push(SessionEvent::Finished(summary));
        }
        Ok(events)
    }

    /// The final summary, once the session has ended
    #[must_use]
    pub fn summary(&self) -> Option<ResultSummary> {
        let won = match self.state {
            SessionState::Active { .. } => return None,
            SessionState::Won { .. } => true,
            SessionState::Lost => false,
        };

        Some(ResultSummary {
            won,
            attempts_used: self.history.len(),
            secret: self.secret.clone(),
            feedback_history: self.history.iter().map(|r| r.feedback).collect(),
        })
    }
}
