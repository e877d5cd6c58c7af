//! ASCII Wordle - CLI
//!
//! Guess the hidden five-letter word in six tries, in a full-screen TUI or
//! in plain line mode.

use anyhow::{Context, Result};
use ascii_wordle::{
    commands::run_simple,
    core::{GameSession, Lexicon, ResultSummary, ScoringPolicy, Word},
    export::{ClipboardSink, ExportSink, FileSink, WriterSink, export_summary},
    interactive::{App, run_tui},
    logging::init_logging,
    wordlists::{build_lexicon, loader::load_from_file},
};
use clap::{Parser, Subcommand};
use rand::{SeedableRng, rngs::StdRng};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "ascii_wordle",
    about = "Wordle in the terminal, drawn with big ASCII block letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for picking the secret word (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File of candidate secret words, one per line (replaces the built-in list)
    #[arg(long, global = true, value_name = "FILE")]
    answers: Option<PathBuf>,

    /// File of extra words accepted as guesses, one per line (added to the built-in list)
    #[arg(long, global = true, value_name = "FILE")]
    allowed: Option<PathBuf>,

    /// Score each letter in a single left-to-right pass
    #[arg(long, global = true)]
    legacy_scoring: bool,

    /// Also write the share text to this file when the game ends
    #[arg(long, global = true, value_name = "FILE")]
    share_file: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Full-screen TUI (default)
    Play,

    /// Line mode: type one guess per line
    Simple,
}

fn read_words(path: &Path) -> Result<Vec<Word>> {
    load_from_file(path).with_context(|| format!("Failed to read word list {}", path.display()))
}

fn load_lexicon(cli: &Cli) -> Result<Lexicon> {
    let answers = cli.answers.as_deref().map(read_words).transpose()?;
    let extra_allowed = match cli.allowed.as_deref() {
        Some(path) => read_words(path)?,
        None => Vec::new(),
    };
    let lexicon = build_lexicon(answers, extra_allowed).context("Unusable word lists")?;

    log::info!(
        "loaded {} candidates, {} accepted guesses",
        lexicon.candidates().len(),
        lexicon.dictionary().len()
    );
    Ok(lexicon)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(cli.log_file.as_deref(), command == Commands::Play)?;

    let lexicon = load_lexicon(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let secret = lexicon.pick_secret(&mut rng)?;
    log::debug!("secret picked (seed {:?})", cli.seed);

    let policy = if cli.legacy_scoring {
        ScoringPolicy::SinglePass
    } else {
        ScoringPolicy::Standard
    };
    let session = GameSession::new(lexicon, secret, policy);

    let mut sinks: Vec<Box<dyn ExportSink>> = Vec::new();
    let summary = match command {
        Commands::Play => {
            // The alternate screen is gone once the TUI exits, so echo the
            // share text on the normal screen.
            sinks.push(Box::new(WriterSink::stdout()));
            sinks.push(Box::new(ClipboardSink::new()));
            run_play_command(session)?
        }
        Commands::Simple => run_simple_command(session)?,
    };

    if let Some(path) = cli.share_file {
        sinks.push(Box::new(FileSink::new(path)));
    }

    if let Some(summary) = summary {
        log::info!("game over: won={} in {}", summary.won, summary.attempts_used);
        export_summary(&summary, &mut sinks);
    }

    Ok(())
}

fn run_play_command(session: GameSession) -> Result<Option<ResultSummary>> {
    let app = App::new(session);
    run_tui(app)
}

fn run_simple_command(mut session: GameSession) -> Result<Option<ResultSummary>> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(&mut session, stdin.lock(), &mut stdout).context("Line mode I/O failed")
}
