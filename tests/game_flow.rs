// Integration tests for ascii_wordle
// Whole games driven through the public API and the line-mode front-end

use ascii_wordle::commands::run_simple;
use ascii_wordle::core::{
    Feedback, GameSession, Key, Lexicon, ScoringPolicy, SessionState, Verdict, Word,
};
use ascii_wordle::export::{ExportSink, FileSink, WriterSink, export_summary};
use ascii_wordle::wordlists::build_lexicon;
use rand::{SeedableRng, rngs::StdRng};
use std::io::Cursor;

use Verdict::{Hit, Miss, Present};

fn word(s: &str) -> Word {
    Word::new(s).unwrap()
}

fn session_with(secret: &str, guesses: &[&str], policy: ScoringPolicy) -> GameSession {
    let lexicon = Lexicon::new(vec![word(secret)], guesses.iter().map(|g| word(g))).unwrap();
    GameSession::new(lexicon, word(secret), policy)
}

fn type_guess(session: &mut GameSession, guess: &str) {
    for c in guess.chars() {
        session.handle_key(Key::from_char(c)).unwrap();
    }
    session.handle_key(Key::Enter).unwrap();
}

fn last_feedback(session: &GameSession) -> Feedback {
    session.history().last().unwrap().feedback
}

fn play_lines(session: &mut GameSession, input: &str) -> String {
    colored::control::set_override(false);
    let mut out = Vec::new();
    run_simple(session, Cursor::new(input), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_crane_crate_game() {
    // CRATE against CRANE misses only the T, then CRANE wins on row two
    let mut session = session_with("crane", &["crate"], ScoringPolicy::Standard);

    type_guess(&mut session, "crate");
    assert_eq!(last_feedback(&session).to_emoji(), "🟩🟩🟩⬛🟩");
    assert_eq!(session.state(), SessionState::Active { row: 1 });

    type_guess(&mut session, "crane");
    assert_eq!(session.state(), SessionState::Won { row: 1 });

    let summary = session.summary().unwrap();
    assert!(summary.won);
    assert_eq!(summary.attempts_used, 2);
    assert_eq!(summary.remark(), "MAGNIFICENT");
    assert_eq!(summary.share_text(), "Wordle 2/6\n\n🟩🟩🟩⬛🟩\n🟩🟩🟩🟩🟩");
}

#[test]
fn test_apple_paper_verdicts() {
    let mut session = session_with("apple", &["paper"], ScoringPolicy::Standard);
    type_guess(&mut session, "paper");

    assert_eq!(
        last_feedback(&session).verdicts(),
        &[Present, Present, Hit, Present, Miss]
    );
}

#[test]
fn test_scoring_policies_differ_on_repeated_letters() {
    let mut standard = session_with("crane", &["eerie"], ScoringPolicy::Standard);
    type_guess(&mut standard, "eerie");
    assert_eq!(
        last_feedback(&standard).verdicts(),
        &[Miss, Miss, Present, Miss, Hit]
    );

    let mut legacy = session_with("crane", &["eerie"], ScoringPolicy::SinglePass);
    type_guess(&mut legacy, "eerie");
    assert_eq!(
        last_feedback(&legacy).verdicts(),
        &[Present, Miss, Present, Miss, Miss]
    );
}

#[test]
fn test_six_misses_lose() {
    let guesses = ["slate", "moist", "pluck", "dough", "witty", "crate"];
    let mut session = session_with("crane", &guesses, ScoringPolicy::Standard);

    for guess in guesses {
        assert!(!session.is_over());
        type_guess(&mut session, guess);
    }

    assert_eq!(session.state(), SessionState::Lost);
    let summary = session.summary().unwrap();
    assert!(!summary.won);
    assert_eq!(summary.attempts_used, 6);
    assert_eq!(summary.remark(), "CRANE");
    assert!(summary.share_text().starts_with("Wordle 6/6\n\n"));

    // The finished session ignores further input
    assert!(session.handle_key(Key::Enter).is_err());
}

#[test]
fn test_rejections_keep_the_row() {
    let mut session = session_with("crane", &["crate"], ScoringPolicy::Standard);

    type_guess(&mut session, "cra");
    assert!(session.history().is_empty());
    assert_eq!(session.buffer().len(), 3);

    for _ in 0..3 {
        session.handle_key(Key::Backspace).unwrap();
    }
    type_guess(&mut session, "zzzzz");
    assert!(session.history().is_empty());
    assert_eq!(session.state(), SessionState::Active { row: 0 });
}

#[test]
fn test_simple_mode_full_game() {
    let mut session = session_with("crane", &["crate", "slate"], ScoringPolicy::Standard);
    let text = play_lines(&mut session, "slate\ncrat\ncrate\ncrane\n");

    assert!(text.contains("NOT ENOUGH LETTERS"));
    assert!(text.contains("IMPRESSIVE"));
    assert!(text.contains("Wordle 3/6"));
    assert_eq!(session.state(), SessionState::Won { row: 2 });
}

#[test]
fn test_simple_mode_gives_up_at_end_of_input() {
    let mut session = session_with("crane", &["crate"], ScoringPolicy::Standard);
    let text = play_lines(&mut session, "crate\n");

    assert!(text.contains("The word was CRANE"));
    assert!(session.summary().is_none());
}

#[test]
fn test_embedded_lexicon_game() {
    let lexicon = build_lexicon(None, Vec::new()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let secret = lexicon.pick_secret(&mut rng).unwrap();
    assert!(lexicon.candidates().contains(&secret));

    // Same seed, same secret
    let again = lexicon.pick_secret(&mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(secret, again);

    let mut session = GameSession::new(lexicon, secret.clone(), ScoringPolicy::Standard);
    type_guess(&mut session, secret.text());
    assert_eq!(session.state(), SessionState::Won { row: 0 });
    assert_eq!(session.summary().unwrap().remark(), "GENIUS");
}

#[test]
fn test_embedded_lists_accept_common_openers() {
    let lexicon = build_lexicon(None, Vec::new()).unwrap();
    let secret = word("crane");
    let mut session = GameSession::new(lexicon, secret, ScoringPolicy::Standard);

    for (row, opener) in ["slate", "stare", "tears", "trace"].into_iter().enumerate() {
        type_guess(&mut session, opener);
        assert_eq!(session.history().len(), row + 1, "{opener} was rejected");
    }
}

#[test]
fn test_share_text_export() {
    // Candidates alone make a usable dictionary
    let mut session = session_with("crane", &[], ScoringPolicy::Standard);
    type_guess(&mut session, "crane");
    let summary = session.summary().unwrap();

    let file_name = format!("ascii_wordle_share_{}.txt", std::process::id());
    let path = std::env::temp_dir().join(file_name);
    let mut sinks: Vec<Box<dyn ExportSink>> = vec![
        Box::new(WriterSink::new(std::io::sink())),
        Box::new(FileSink::new(&path)),
    ];
    export_summary(&summary, &mut sinks);

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, "Wordle 1/6\n\n🟩🟩🟩🟩🟩\n");
    let _ = std::fs::remove_file(path);
}
