//! Display functions for the simple front-end

use super::formatters::{attempts_bar, row_tiles};
use crate::core::{MAX_ROWS, ResultSummary, RowRecord, SubmitError};
use colored::Colorize;
use std::io::{self, Write};

/// Print the game title and instructions
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_banner<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(40).cyan())?;
    writeln!(out, " {}", "ASCII WORDLE".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, "Guess the five-letter word in {MAX_ROWS} tries.")?;
    writeln!(out, "Type a word and press Enter. Ctrl-D to give up.\n")
}

/// Print one scored row
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_row<W: Write>(out: &mut W, row: usize, record: &RowRecord) -> io::Result<()> {
    writeln!(
        out,
        "{} {}  {}",
        format!("{}/{MAX_ROWS}", row + 1).bright_black(),
        row_tiles(&record.guess, &record.feedback),
        attempts_bar(row + 1, MAX_ROWS).bright_black()
    )
}

/// Print why a guess was not accepted
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_rejection<W: Write>(out: &mut W, err: &SubmitError) -> io::Result<()> {
    let hint = match err {
        SubmitError::TooShort { .. } => "NOT ENOUGH LETTERS".to_string(),
        SubmitError::NotInLexicon(word) => format!("{word}: NOT IN WORD LIST"),
    };
    writeln!(out, "    {}", hint.red().bold())
}

/// Print the end-of-game remark and the share block
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_summary<W: Write>(out: &mut W, summary: &ResultSummary) -> io::Result<()> {
    writeln!(out)?;
    if summary.won {
        writeln!(out, "{}", summary.remark().green().bold())?;
    } else {
        writeln!(
            out,
            "{} {}",
            "The word was".red(),
            summary.remark().bright_yellow().bold()
        )?;
    }
    writeln!(out, "\n{}", summary.share_text())
}
