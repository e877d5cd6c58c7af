//! TUI application state and logic

use super::board::RenderContext;
use crate::core::{GameSession, Key, ResultSummary};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// What a raw terminal key means to the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Game(Key),
}

/// Map a crossterm key event to an app action
#[must_use]
pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc => Action::Quit,
        KeyCode::Char(c) => Action::Game(Key::from_char(c)),
        KeyCode::Backspace => Action::Game(Key::Backspace),
        KeyCode::Enter => Action::Game(Key::Enter),
        _ => Action::Game(Key::Other),
    }
}

/// Application state
pub struct App {
    pub session: GameSession,
    pub board: RenderContext,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            board: RenderContext::new(),
            should_quit: false,
        }
    }

    /// Handle one action
    ///
    /// Once the game is over, any key acknowledges the result and quits.
    pub fn handle_action(&mut self, action: Action) {
        let key = match action {
            Action::Quit => {
                self.should_quit = true;
                return;
            }
            Action::Game(key) => key,
        };

        if self.session.is_over() {
            self.should_quit = true;
            return;
        }

        match self.session.handle_key(key) {
            Ok(events) => self.board.apply_all(&events),
            Err(err) => log::debug!("ignoring {key:?}: {err}"),
        }
    }

    /// Summary of a finished game, if any
    #[must_use]
    pub fn summary(&self) -> Option<ResultSummary> {
        self.session.summary()
    }
}

/// Run the TUI application
///
/// Returns the game summary when the game was played to the end.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Option<ResultSummary>> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Option<ResultSummary>> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_action(map_key(key));
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.summary())
}
