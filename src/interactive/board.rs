//! Render context: everything the TUI draws, kept in sync from session events

use crate::core::{CellMark, MAX_ROWS, ResultSummary, SessionEvent, SubmitError, WORD_LENGTH};

/// Banner text shown under the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Rejected(SubmitError),
    Finished { remark: String, won: bool },
}

impl Notice {
    #[must_use]
    pub fn text(&self) -> String {
        match self {
            Self::Rejected(SubmitError::TooShort { .. }) => "NOT ENOUGH LETTERS".to_string(),
            Self::Rejected(SubmitError::NotInLexicon(_)) => "NOT IN WORD LIST".to_string(),
            Self::Finished { remark, .. } => remark.clone(),
        }
    }
}

/// The drawable state of a game
///
/// Only ever changed through [`RenderContext::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    cells: [[CellMark; WORD_LENGTH]; MAX_ROWS],
    notice: Option<Notice>,
    summary: Option<ResultSummary>,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            cells: [[CellMark::Empty; WORD_LENGTH]; MAX_ROWS],
            notice: None,
            summary: None,
        }
    }
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the board from one session event
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Cell(cell) => {
                if let Some(slot) = self
                    .cells
                    .get_mut(cell.row)
                    .and_then(|row| row.get_mut(cell.col))
                {
                    *slot = cell.mark;
                }
                // Typing again dismisses a rejection banner
                if matches!(self.notice, Some(Notice::Rejected(_))) {
                    self.notice = None;
                }
            }
            SessionEvent::Rejected(err) => {
                self.notice = Some(Notice::Rejected(err.clone()));
            }
            SessionEvent::Finished(summary) => {
                self.notice = Some(Notice::Finished {
                    remark: summary.remark().to_string(),
                    won: summary.won,
                });
                self.summary = Some(summary.clone());
            }
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a SessionEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> CellMark {
        self.cells[row][col]
    }

    #[must_use]
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    #[must_use]
    pub fn summary(&self) -> Option<&ResultSummary> {
        self.summary.as_ref()
    }
}
