//! Simple line mode
//!
//! Plays a game without the TUI: each input line is typed into the session
//! key by key and submitted with Enter. Useful on small terminals and for
//! scripted play.

use crate::core::{GameSession, Key, ResultSummary, SessionEvent, SessionState};
use crate::output::{write_banner, write_rejection, write_row, write_summary};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Play one game reading guesses from `reader` and printing to `out`
///
/// Returns the summary if the game reached an end, or `None` if input ran
/// out first (the secret is revealed in that case).
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    session: &mut GameSession,
    mut reader: R,
    out: &mut W,
) -> io::Result<Option<ResultSummary>> {
    write_banner(out)?;

    loop {
        let SessionState::Active { row } = session.state() else {
            return Ok(session.summary());
        };

        let Some(line) = get_user_input(&mut reader, out, &format!("Guess {}", row + 1))? else {
            writeln!(
                out,
                "\n{} {}",
                "The word was".red(),
                session.secret().text().bright_yellow().bold()
            )?;
            return Ok(None);
        };

        let mut finished = None;
        for event in play_line(session, &line) {
            match event {
                SessionEvent::Rejected(err) => write_rejection(out, &err)?,
                SessionEvent::Finished(summary) => finished = Some(summary),
                SessionEvent::Cell(_) => {}
            }
        }

        if let Some(record) = session.history().get(row) {
            write_row(out, row, record)?;
        }
        if let Some(summary) = finished {
            write_summary(out, &summary)?;
        }
    }
}

/// Type a whole line into the active row and press Enter
///
/// Whatever was left in the row from a rejected attempt is erased first.
/// Characters that are not letters are dropped like any unmapped key.
fn play_line(session: &mut GameSession, line: &str) -> Vec<SessionEvent> {
    let mut events = Vec::new();

    let keys = std::iter::repeat_n(Key::Backspace, session.buffer().len())
        .chain(line.chars().map(Key::from_char))
        .chain(std::iter::once(Key::Enter));

    for key in keys {
        match session.handle_key(key) {
            Ok(mut produced) => events.append(&mut produced),
            Err(err) => {
                log::debug!("ignoring {key:?}: {err}");
                break;
            }
        }
    }

    events
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Lexicon, ScoringPolicy, Word};
    use std::io::Cursor;

    fn session(secret: &str) -> GameSession {
        let valid = ["crane", "crate", "slate", "moist", "pluck", "dough", "witty"]
            .map(|w| Word::new(w).unwrap());
        let lexicon = Lexicon::new(vec![Word::new(secret).unwrap()], valid).unwrap();
        GameSession::new(lexicon, Word::new(secret).unwrap(), ScoringPolicy::Standard)
    }

    fn play(session: &mut GameSession, input: &str) -> (Option<ResultSummary>, String) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let summary = run_simple(session, Cursor::new(input), &mut out).unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn win_on_second_guess() {
        let mut s = session("crane");
        let (summary, text) = play(&mut s, "crate\ncrane\n");

        let summary = summary.unwrap();
        assert!(summary.won);
        assert_eq!(summary.attempts_used, 2);
        assert!(text.contains("MAGNIFICENT"));
        assert!(text.contains("Wordle 2/6\n\n🟩🟩🟩⬛🟩\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn rejected_lines_do_not_use_a_row() {
        let mut s = session("crane");
        let (summary, text) = play(&mut s, "cra\nzzzzz\ncrane\n");

        assert!(text.contains("NOT ENOUGH LETTERS"));
        assert!(text.contains("ZZZZZ: NOT IN WORD LIST"));
        assert_eq!(summary.unwrap().attempts_used, 1);
    }

    #[test]
    fn lowercase_and_noise_are_accepted() {
        let mut s = session("crane");
        let (summary, _) = play(&mut s, "  c-r a.n e \n");
        assert!(summary.unwrap().won);
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut s = session("crane");
        let (summary, text) = play(&mut s, "slate\nmoist\npluck\ndough\nwitty\ncrate\n");

        let summary = summary.unwrap();
        assert!(!summary.won);
        assert_eq!(summary.attempts_used, 6);
        assert!(text.contains("The word was CRANE"));
        assert_eq!(s.state(), SessionState::Lost);
    }

    #[test]
    fn end_of_input_gives_up() {
        let mut s = session("crane");
        let (summary, text) = play(&mut s, "slate\n");
        assert!(summary.is_none());
        assert!(text.contains("The word was CRANE"));
        assert_eq!(s.state(), SessionState::Active { row: 1 });
    }
}
