//! Big block-letter glyphs drawn inside board cells

use crate::core::Letter;

/// Rows in every glyph
pub const GLYPH_HEIGHT: usize = 5;

/// Columns in every glyph
pub const GLYPH_WIDTH: usize = 7;

type Glyph = [&'static str; GLYPH_HEIGHT];

#[rustfmt::skip]
const GLYPHS: [Glyph; 26] = [
    // A
    [" ████  ", "██  ██ ", "██████ ", "██  ██ ", "██  ██ "],
    // B
    ["█████  ", "██  ██ ", "█████  ", "██  ██ ", "█████  "],
    // C
    [" █████ ", "██     ", "██     ", "██     ", " █████ "],
    // D
    ["█████  ", "██  ██ ", "██  ██ ", "██  ██ ", "█████  "],
    // E
    ["██████ ", "██     ", "████   ", "██     ", "██████ "],
    // F
    ["██████ ", "██     ", "████   ", "██     ", "██     "],
    // G
    [" █████ ", "██     ", "██ ███ ", "██  ██ ", " ████  "],
    // H
    ["██  ██ ", "██  ██ ", "██████ ", "██  ██ ", "██  ██ "],
    // I
    ["██████ ", "  ██   ", "  ██   ", "  ██   ", "██████ "],
    // J
    ["    ██ ", "    ██ ", "    ██ ", "██  ██ ", " ████  "],
    // K
    ["██  ██ ", "██ ██  ", "████   ", "██ ██  ", "██  ██ "],
    // L
    ["██     ", "██     ", "██     ", "██     ", "██████ "],
    // M
    ["██   ██", "███ ███", "██ █ ██", "██   ██", "██   ██"],
    // N
    ["██   ██", "███  ██", "██ █ ██", "██  ███", "██   ██"],
    // O
    [" ████  ", "██  ██ ", "██  ██ ", "██  ██ ", " ████  "],
    // P
    ["█████  ", "██  ██ ", "█████  ", "██     ", "██     "],
    // Q
    [" ████  ", "██  ██ ", "██  ██ ", "██ ██  ", " ██ ██ "],
    // R
    ["█████  ", "██  ██ ", "█████  ", "██ ██  ", "██  ██ "],
    // S
    [" █████ ", "██     ", " ████  ", "    ██ ", "█████  "],
    // T
    ["██████ ", "  ██   ", "  ██   ", "  ██   ", "  ██   "],
    // U
    ["██  ██ ", "██  ██ ", "██  ██ ", "██  ██ ", " ████  "],
    // V
    ["██  ██ ", "██  ██ ", "██  ██ ", " ████  ", "  ██   "],
    // W
    ["██   ██", "██   ██", "██ █ ██", "███████", "██   ██"],
    // X
    ["██  ██ ", " ████  ", "  ██   ", " ████  ", "██  ██ "],
    // Y
    ["██  ██ ", "██  ██ ", " ████  ", "  ██   ", "  ██   "],
    // Z
    ["██████ ", "   ██  ", "  ██   ", " ██    ", "██████ "],
];

/// The block-letter rows for `letter`
#[must_use]
pub fn glyph(letter: Letter) -> &'static Glyph {
    &GLYPHS[letter.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_fixed_size() {
        for (i, rows) in GLYPHS.iter().enumerate() {
            for row in rows {
                assert_eq!(row.chars().count(), GLYPH_WIDTH, "glyph {i} row {row:?}");
            }
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        for (i, a) in GLYPHS.iter().enumerate() {
            for b in &GLYPHS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn glyph_lookup_by_letter() {
        let i = Letter::from_char('i').unwrap();
        assert_eq!(glyph(i)[1], "  ██   ");
    }
}
