//! ASCII Wordle
//!
//! A terminal Wordle: six tries to find a hidden five-letter word, with
//! per-letter feedback drawn as big block letters in colored boxes.
//!
//! # Quick Start
//!
//! ```rust
//! use ascii_wordle::core::{GameSession, Key, Lexicon, ScoringPolicy, Word};
//!
//! let secret = Word::new("crane").unwrap();
//! let guess = Word::new("crate").unwrap();
//! let lexicon = Lexicon::new(vec![secret.clone()], vec![guess]).unwrap();
//! let mut session = GameSession::new(lexicon, secret, ScoringPolicy::Standard);
//!
//! for c in "crate".chars() {
//!     session.handle_key(Key::from_char(c)).unwrap();
//! }
//! session.handle_key(Key::Enter).unwrap();
//!
//! assert_eq!(session.history()[0].feedback.to_emoji(), "🟩🟩🟩⬛🟩");
//! ```

// Core game logic
pub mod core;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Share text export
pub mod export;

// Logger setup
pub mod logging;
