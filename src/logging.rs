//! Logger setup
//!
//! Logging goes through the `log` facade. `RUST_LOG` always wins; otherwise
//! the default level depends on where the output ends up.

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// Default filter when nothing is configured
///
/// Writing to a file is safe at any level. On stderr, a full-screen TUI
/// would be scribbled over, so it stays silent there.
#[must_use]
pub fn default_filter(log_file: Option<&Path>, full_screen: bool) -> &'static str {
    match (log_file, full_screen) {
        (Some(_), _) => "info",
        (None, true) => "off",
        (None, false) => "warn",
    }
}

/// Install the global logger
///
/// # Errors
/// Fails if the log file cannot be created or a logger is already installed.
pub fn init_logging(log_file: Option<&Path>, full_screen: bool) -> Result<()> {
    let env = Env::default().default_filter_or(default_filter(log_file, full_screen));
    let mut builder = Builder::from_env(env);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Logger already initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tui_without_file_is_silent() {
        assert_eq!(default_filter(None, true), "off");
    }

    #[test]
    fn line_mode_logs_warnings() {
        assert_eq!(default_filter(None, false), "warn");
    }

    #[test]
    fn file_logging_is_verbose() {
        let path = Path::new("game.log");
        assert_eq!(default_filter(Some(path), true), "info");
        assert_eq!(default_filter(Some(path), false), "info");
    }
}
