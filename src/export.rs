//! Hand-off of the share text once a game ends
//!
//! Sinks are best-effort: a failing sink is logged and never changes the
//! outcome of the game.

use crate::core::ResultSummary;
use arboard::Clipboard;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination for the shareable result block
pub trait ExportSink {
    /// Deliver the share text
    ///
    /// # Errors
    /// Returns an I/O error if the text could not be delivered.
    fn export(&mut self, text: &str) -> io::Result<()>;
}

/// Writes the share text to any writer (stdout by default)
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ExportSink for WriterSink<W> {
    fn export(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")?;
        self.writer.flush()
    }
}

/// Writes the share text to a file, replacing its contents
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for FileSink {
    fn export(&mut self, text: &str) -> io::Result<()> {
        fs::write(&self.path, format!("{text}\n"))
    }
}

/// Copies the share text to the system clipboard
///
/// On X11 the copied text is served by this process and disappears when it
/// exits, unless a clipboard manager takes it over.
#[derive(Default)]
pub struct ClipboardSink {
    clipboard: Option<Clipboard>,
}

impl ClipboardSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExportSink for ClipboardSink {
    fn export(&mut self, text: &str) -> io::Result<()> {
        let mut clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(io::Error::other)?,
        };
        let result = clipboard.set_text(text).map_err(io::Error::other);
        self.clipboard = Some(clipboard);
        result
    }
}

/// Send a summary to every sink, logging failures
pub fn export_summary(summary: &ResultSummary, sinks: &mut [Box<dyn ExportSink>]) {
    let text = summary.share_text();
    for sink in sinks.iter_mut() {
        if let Err(err) = sink.export(&text) {
            log::warn!("could not export result: {err}");
        }
    }
}
