//! TUI rendering with ratatui
//!
//! Draws the 6×5 board of colored boxes. Letters use the block glyphs when the
//! terminal is large enough and fall back to plain letters otherwise.

use super::app::App;
use super::board::{Notice, RenderContext};
use super::glyphs::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph};
use crate::core::{CellMark, Letter, MAX_ROWS, Verdict, WORD_LENGTH};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

const BIG_CELL: (u16, u16) = (GLYPH_WIDTH as u16 + 4, GLYPH_HEIGHT as u16 + 2);
const SMALL_CELL: (u16, u16) = (5, 3);
const CELL_GAP: u16 = 1;

const EMPTY_BG: Color = Color::Indexed(236);
const HIT_BG: Color = Color::Indexed(70);
const PRESENT_BG: Color = Color::Indexed(178);
const MISS_BG: Color = Color::Indexed(240);

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header
        Constraint::Min(10),   // Board
        Constraint::Length(3), // Notice
        Constraint::Length(1), // Help
    ])
    .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &app.board, chunks[1]);
    render_notice(f, &app.board, chunks[2]);
    render_help(f, app.session.is_over(), chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("ASCII WORDLE")
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(header, area);
}

/// Pick the largest cell size whose grid fits in `area`
#[must_use]
pub fn cell_size(area: Rect) -> (u16, u16) {
    let fits = |(w, h): (u16, u16)| {
        let grid_w = WORD_LENGTH as u16 * (w + CELL_GAP);
        let grid_h = MAX_ROWS as u16 * (h + CELL_GAP);
        grid_w <= area.width && grid_h <= area.height
    };
    if fits(BIG_CELL) { BIG_CELL } else { SMALL_CELL }
}

fn render_board(f: &mut Frame, board: &RenderContext, area: Rect) {
    let (cell_w, cell_h) = cell_size(area);

    let rows = Layout::vertical([Constraint::Length(cell_h); MAX_ROWS])
        .spacing(CELL_GAP)
        .flex(Flex::Center)
        .split(area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(cell_w); WORD_LENGTH])
            .spacing(CELL_GAP)
            .flex(Flex::Center)
            .split(*row_area);

        for (col, cell_area) in cols.iter().enumerate() {
            render_cell(f, board.cell(row, col), *cell_area);
        }
    }
}

fn cell_colors(mark: CellMark) -> (Color, Color) {
    match mark {
        CellMark::Empty | CellMark::Pending(_) => (EMPTY_BG, Color::White),
        CellMark::Scored(_, Verdict::Hit) => (HIT_BG, Color::Black),
        CellMark::Scored(_, Verdict::Present) => (PRESENT_BG, Color::Black),
        CellMark::Scored(_, Verdict::Miss) => (MISS_BG, Color::White),
    }
}

fn render_cell(f: &mut Frame, mark: CellMark, area: Rect) {
    let (bg, fg) = cell_colors(mark);
    let style = Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD);

    let letter = match mark {
        CellMark::Empty => None,
        CellMark::Pending(letter) | CellMark::Scored(letter, _) => Some(letter),
    };

    let paragraph = Paragraph::new(cell_lines(letter, area))
        .style(style)
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Text lines for one cell, vertically centered in `area`
fn cell_lines(letter: Option<Letter>, area: Rect) -> Vec<Line<'static>> {
    let Some(letter) = letter else {
        return Vec::new();
    };

    let big = area.width as usize >= GLYPH_WIDTH && area.height as usize >= GLYPH_HEIGHT;
    let body: Vec<Line<'static>> = if big {
        glyph(letter).iter().map(|&row| Line::from(row)).collect()
    } else {
        vec![Line::from(letter.to_string())]
    };

    let pad = (area.height as usize).saturating_sub(body.len()) / 2;
    std::iter::repeat_n(Line::default(), pad).chain(body).collect()
}

fn render_notice(f: &mut Frame, board: &RenderContext, area: Rect) {
    let Some(notice) = board.notice() else {
        return;
    };

    let color = match notice {
        Notice::Rejected(_) => Color::Red,
        Notice::Finished { won: true, .. } => Color::Green,
        Notice::Finished { won: false, .. } => Color::Yellow,
    };

    let paragraph = Paragraph::new(notice.text())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Double));
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, game_over: bool, area: Rect) {
    let help_text = if game_over {
        "Press any key to exit"
    } else {
        "A-Z: Type | Backspace: Delete | Enter: Submit | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
