//! The 3×3 big font, drawn with C64-style half-block glyphs (▄ ▀ █).
//!
//! Covers uppercase A–Z, digits, and a small punctuation set. Lookup is
//! total: anything unmapped (lowercase included — callers uppercase
//! first) falls back to the `?` glyph.

/// One big-font character: 3 rows of 3 columns each.
///
/// # Example
/// ```
/// use pf_core::font::lookup;
/// let g = lookup('A');
/// assert_eq!(g.rows.len(), 3);
/// assert!(g.rows.iter().all(|r| r.chars().count() == 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Bitmap rows, top to bottom.
    pub rows: [&'static str; 3],
}

const fn glyph(top: &'static str, mid: &'static str, bot: &'static str) -> Glyph {
    Glyph {
        rows: [top, mid, bot],
    }
}

/// Glyph used for every character outside the supported alphabet.
pub const FALLBACK: Glyph = glyph("▀▀█", " ▄▀", " ▀ ");

/// Look up the big-font glyph for a character. Total over `char`.
///
/// # Example
/// ```
/// use pf_core::font::{lookup, FALLBACK};
/// assert_eq!(lookup('?'), FALLBACK);
/// assert_eq!(lookup('~'), FALLBACK);
/// assert_ne!(lookup('A'), FALLBACK);
/// ```
#[must_use]
pub fn lookup(ch: char) -> Glyph {
    match ch {
        'A' => glyph("▄▀▄", "█▀█", "▀ ▀"),
        'B' => glyph("█▀▄", "█▀▄", "▀▀ "),
        'C' => glyph("▄▀▀", "█  ", "▀▄▄"),
        'D' => glyph("█▀▄", "█ █", "▀▀ "),
        'E' => glyph("█▀▀", "█▀▀", "▀▀▀"),
        'F' => glyph("█▀▀", "█▀▀", "▀  "),
        'G' => glyph("▄▀▀", "█ █", "▀▄█"),
        'H' => glyph("█ █", "█▀█", "▀ ▀"),
        'I' => glyph(" █ ", " █ ", " ▀ "),
        'J' => glyph("  █", "  █", "▀▀ "),
        'K' => glyph("█▄ ", "█▀▄", "▀ ▀"),
        'L' => glyph("█  ", "█  ", "▀▀▀"),
        'M' => glyph("█▀█", "█ █", "▀ ▀"),
        'N' => glyph("█▀█", "█ █", "▀ ▀"),
        'O' => glyph("▄▀▄", "█ █", "▀▄▀"),
        'P' => glyph("█▀▄", "█▀▀", "▀  "),
        'Q' => glyph("▄▀▄", "█ █", "▀▄█"),
        'R' => glyph("█▀▄", "█▀▄", "▀ ▀"),
        'S' => glyph("▄▀▀", "▀▄▄", "▄▄▀"),
        'T' => glyph("▀█▀", " █ ", " ▀ "),
        'U' => glyph("█ █", "█ █", "▀▀▀"),
        'V' => glyph("█ █", "█ █", " ▀ "),
        'W' => glyph("█ █", "█ █", "▀▄▀"),
        'X' => glyph("▀▄▀", " █ ", "▄▀▄"),
        'Y' => glyph("█ █", " █ ", " ▀ "),
        'Z' => glyph("▀▀█", " ▄▀", "█▄▄"),
        '0' => glyph("▄▀▄", "█ █", "▀▄▀"),
        '1' => glyph(" ▄ ", " █ ", " ▀ "),
        '2' => glyph("▀▀█", "▄▀ ", "▀▀▀"),
        '3' => glyph("▀▀█", " ▄█", "▀▀ "),
        '4' => glyph("█ █", "▀▀█", "  ▀"),
        '5' => glyph("█▀▀", "▀▄▄", "▄▄▀"),
        '6' => glyph("▄▀ ", "█▀▄", "▀▄▀"),
        '7' => glyph("▀▀█", "  █", "  ▀"),
        '8' => glyph("▄▀▄", "█▀█", "▀▄▀"),
        '9' => glyph("▄▀▄", "▀▄█", " ▀ "),
        ' ' => glyph("   ", "   ", "   "),
        '.' => glyph("   ", "   ", " ▀ "),
        '!' => glyph(" █ ", " █ ", " ▀ "),
        '-' => glyph("   ", "▀▀▀", "   "),
        '+' => glyph(" █ ", "▀█▀", " ▀ "),
        '=' => glyph("   ", "▀▀▀", "▀▀▀"),
        '*' => glyph("▄▀▄", " █ ", "▀▄▀"),
        _ => FALLBACK,
    }
}
