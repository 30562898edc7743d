//! Big-font rasterizer: three bitmap rows per logical text line.
//!
//! Cell geometry is 3 columns (classic) or 4 (four-column / BBS), with
//! one blank column between letters and a cell-width gap between
//! tokens. Four-column mode fills silhouettes with the letter itself;
//! BBS mode stretches symmetrically and keeps the bitmap shapes.

use pf_core::border::BorderPalette;
use pf_core::config::FormatConfig;
use pf_core::font;

use crate::outline::outline_rows;
use crate::wrap::{center_row, pad_row, split_tokens};

const LETTER_SPACING: usize = 1;

/// Render text with the 3-row big font, honoring every styling flag.
///
/// # Example
/// ```
/// use pf_ascii::bigtext::render_big;
/// use pf_core::config::FormatConfig;
/// let config = FormatConfig { big_text: true, ..FormatConfig::default() };
/// let out = render_big("HI", &config);
/// assert_eq!(out.lines().count(), 3);
/// ```
#[must_use]
pub fn render_big(text: &str, config: &FormatConfig) -> String {
    // The big-font path always renders uppercase.
    let text = text.to_uppercase();

    let bbs = config.bbs_mode;
    let cell_width = if config.four_column || bbs { 4 } else { 3 };
    let available = config.content_width();
    let palette = BorderPalette::for_mode(bbs);

    let lines = pack_tokens(&text, cell_width, available);

    let mut out: Vec<String> = Vec::new();
    if config.border {
        out.push(palette.top_rule(available));
    }

    for (l_idx, line_tokens) in lines.iter().enumerate() {
        // Blank spacer row between logical lines, not after the last.
        if l_idx > 0 {
            if config.border {
                out.push(format!(
                    "{}{}{}",
                    palette.vertical,
                    " ".repeat(available),
                    palette.vertical
                ));
            } else {
                out.push(String::new());
            }
        }

        let mut rows = assemble_rows(line_tokens, cell_width, config);

        if config.ascii_outline && !bbs {
            rows = outline_rows(&rows);
        }

        for row in &rows {
            let truncated: String = row.chars().take(available).collect();
            let finished = if config.center {
                center_row(&truncated, available)
            } else {
                pad_row(&truncated, available)
            };
            if config.border {
                out.push(format!("{}{}{}", palette.vertical, finished, palette.vertical));
            } else {
                out.push(finished);
            }
        }
    }

    if config.border {
        out.push(palette.bottom_rule(available));
    }
    out.join("\n")
}

/// Rendered width of a token: `n` cells plus `n - 1` spacing columns.
fn token_width(token: &str, cell_width: usize) -> usize {
    let len = token.chars().count();
    if len == 0 {
        0
    } else {
        len * cell_width + (len - 1) * LETTER_SPACING
    }
}

/// Greedy token packing. Never flushes an empty accumulator: a single
/// token wider than the line still gets placed (and is truncated later).
fn pack_tokens(text: &str, cell_width: usize, available: usize) -> Vec<Vec<String>> {
    let mut lines: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_width = 0usize;

    for token in split_tokens(text) {
        let width = token_width(&token, cell_width);
        if current_width + width > available && current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(token);
        current_width += width;
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Stretch a 3-column glyph row to the active cell width.
///
/// BBS duplicates the middle column (`[0,1,1,2]`); plain four-column
/// resamples by nearest index (`out[k] = row[k*3/4]`).
fn scale_row(row: &str, cell_width: usize, bbs: bool) -> String {
    if cell_width == 3 {
        return row.to_string();
    }
    let chars: Vec<char> = row.chars().collect();
    if bbs {
        [chars[0], chars[1], chars[1], chars[2]].iter().collect()
    } else {
        (0..4).map(|k| chars[k * 3 / 4]).collect()
    }
}

/// Fill character for four-column silhouettes: the letter itself when
/// alphanumeric, a fixed placeholder otherwise.
fn fill_char(ch: char) -> char {
    if ch.is_ascii_uppercase() || ch.is_ascii_digit() {
        ch
    } else {
        'X'
    }
}

/// Replace every non-space cell of a stretched row with the fill char.
fn fill_row(row: &str, fill: char) -> String {
    row.chars().map(|c| if c == ' ' { ' ' } else { fill }).collect()
}

/// Concatenate the per-character bitmap rows for one logical line.
fn assemble_rows(tokens: &[String], cell_width: usize, config: &FormatConfig) -> Vec<String> {
    let bbs = config.bbs_mode;
    let fill_mode = config.four_column && !bbs;
    let mut rows = vec![String::new(), String::new(), String::new()];

    for (t_idx, token) in tokens.iter().enumerate() {
        let chars: Vec<char> = token.chars().collect();
        for (i, &ch) in chars.iter().enumerate() {
            let glyph = font::lookup(ch);
            for (r, row) in rows.iter_mut().enumerate() {
                let mut cell = scale_row(glyph.rows[r], cell_width, bbs);
                if fill_mode {
                    cell = fill_row(&cell, fill_char(ch));
                }
                row.push_str(&cell);
                if i + 1 < chars.len() {
                    for _ in 0..LETTER_SPACING {
                        row.push(' ');
                    }
                }
            }
        }
        if t_idx + 1 < tokens.len() {
            for row in &mut rows {
                for _ in 0..cell_width {
                    row.push(' ');
                }
            }
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big_config() -> FormatConfig {
        FormatConfig {
            big_text: true,
            ..FormatConfig::default()
        }
    }

    #[test]
    fn hi_renders_three_rows_of_seven_glyph_columns() {
        let out = render_big("HI", &big_config());
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.chars().count(), 40, "left-padded to content width");
            // two 3-wide glyphs + 1 spacing column of real content
            assert!(row.trim_end().chars().count() <= 7);
        }
        assert_eq!(rows[0].trim_end(), "█ █  █");
    }

    #[test]
    fn centering_pads_both_sides() {
        let config = FormatConfig {
            center: true,
            ..big_config()
        };
        let out = render_big("HI", &config);
        let first = out.lines().next().unwrap();
        assert_eq!(first.chars().count(), 40);
        assert!(first.starts_with(' ') && first.ends_with(' '));
        // deficit 33 → 16 left, 17 right
        assert_eq!(first.chars().take_while(|&c| c == ' ').count(), 16);
    }

    #[test]
    fn bbs_stretch_duplicates_middle_column() {
        assert_eq!(scale_row("▄▀▄", 4, true), "▄▀▀▄");
        assert_eq!(scale_row(" █ ", 4, true), " ██ ");
    }

    #[test]
    fn plain_four_column_resamples_nearest_index() {
        // out[k] = row[k*3/4] → indices 0, 0, 1, 2
        assert_eq!(scale_row("▄▀█", 4, false), "▄▄▀█");
    }

    #[test]
    fn fill_mode_uses_letter_or_placeholder() {
        let config = FormatConfig {
            four_column: true,
            ..FormatConfig::default()
        };
        let out = render_big("a", &config);
        // 'a' uppercases to 'A', which fills with itself
        assert!(out.contains('A'));
        assert!(!out.contains('█'));

        let out = render_big("!", &config);
        // '!' is not alphanumeric: silhouette fills with 'X'
        assert!(out.contains('X'));
    }

    #[test]
    fn outline_flag_replaces_blocks_with_edges() {
        let config = FormatConfig {
            ascii_outline: true,
            ..FormatConfig::default()
        };
        let out = render_big("O", &config);
        assert!(out.chars().all(|c| matches!(c, '+' | '-' | '|' | '.' | ' ' | '\n')));
        assert!(out.contains('+'));
    }

    #[test]
    fn bbs_border_is_pure_ascii() {
        let config = FormatConfig {
            big_text: true,
            border: true,
            bbs_mode: true,
            center: true,
            ..FormatConfig::default()
        };
        let out = render_big("HI 5", &config);
        for row in out.lines() {
            assert_eq!(row.chars().count(), 40);
            assert!(
                !row.contains(['╔', '╗', '╚', '╝', '═', '║']),
                "box-drawing glyph leaked into BBS mode: {row}"
            );
        }
        assert!(out.starts_with("+--"));
        assert!(out.ends_with("-+"));
    }

    #[test]
    fn oversized_word_is_placed_alone_and_truncated() {
        let out = render_big("ABCDEFGHIJKL", &big_config());
        let rows: Vec<&str> = out.lines().collect();
        // 12 letters × 3 + 11 spacing = 47 columns, truncated to 40
        assert_eq!(rows.len(), 3);
        for row in &rows {
            assert_eq!(row.chars().count(), 40);
        }
    }

    #[test]
    fn unknown_characters_render_the_fallback_glyph() {
        let known = render_big("?", &big_config());
        let unknown = render_big("%", &big_config());
        assert_eq!(known, unknown);
    }

    #[test]
    fn spacer_row_between_logical_lines() {
        // Two words too wide to share one 40-column line in big font
        let out = render_big("HELLO WORLD", &big_config());
        let rows: Vec<&str> = out.lines().collect();
        // 3 rows + spacer + 3 rows
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[3], "");
    }
}
