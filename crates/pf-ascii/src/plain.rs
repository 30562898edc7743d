//! Plain-text rasterizer: one output row per wrapped input line.
//!
//! Default path whenever no big-font flag is active.

use pf_core::border::BorderPalette;
use pf_core::config::FormatConfig;

use crate::wrap::{frame_lines, wrap_text};

/// Render text as a wrapped, optionally framed 40-column grid.
///
/// # Example
/// ```
/// use pf_ascii::plain::render_plain;
/// use pf_core::config::FormatConfig;
/// let out = render_plain("hi", &FormatConfig::default());
/// assert_eq!(out.chars().count(), 40);
/// ```
#[must_use]
pub fn render_plain(text: &str, config: &FormatConfig) -> String {
    let mut text = if config.force_uppercase() {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    // Fullwidth simulation never applies in BBS mode (ASCII only).
    if config.block_simulate && !config.bbs_mode {
        text = simulate_blocks(&text);
    }

    let width = config.content_width();
    let lines = wrap_text(&text, width);
    frame_lines(
        &lines,
        width,
        config.border,
        BorderPalette::for_mode(config.bbs_mode),
    )
}

/// Map ASCII printables (33–126) to their Unicode fullwidth
/// counterparts (codepoint + 0xFEE0). Spaces and everything else pass
/// through unchanged.
///
/// # Example
/// ```
/// use pf_ascii::plain::simulate_blocks;
/// assert_eq!(simulate_blocks("A b!"), "Ａ ｂ！");
/// ```
#[must_use]
pub fn simulate_blocks(text: &str) -> String {
    text.chars()
        .map(|ch| {
            let code = ch as u32;
            if (33..=126).contains(&code) {
                char::from_u32(code + 0xFEE0).unwrap_or(ch)
            } else {
                ch
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullwidth_mapping_is_a_bijection_on_printables() {
        for code in 33u32..=126 {
            let ch = char::from_u32(code).unwrap();
            let mapped: Vec<char> = simulate_blocks(&ch.to_string()).chars().collect();
            assert_eq!(mapped.len(), 1);
            assert_eq!(mapped[0] as u32, code + 0xFEE0);
        }
        assert_eq!(simulate_blocks(" "), " ");
        assert_eq!(simulate_blocks("é"), "é");
    }

    #[test]
    fn bbs_mode_suppresses_block_simulation() {
        let config = FormatConfig {
            block_simulate: true,
            bbs_mode: true,
            ..FormatConfig::default()
        };
        // bbs also forces uppercase on the plain path
        assert!(render_plain("abc", &config).starts_with("ABC"));
    }

    #[test]
    fn every_output_row_has_identical_length() {
        let configs = [
            FormatConfig::default(),
            FormatConfig {
                border: true,
                ..FormatConfig::default()
            },
            FormatConfig {
                border: true,
                block_simulate: true,
                uppercase: true,
                ..FormatConfig::default()
            },
        ];
        for config in configs {
            let out = render_plain("a few words\nand a second line that wraps around the screen", &config);
            // border width 38 + 2 sentinels, or bare content width 40
            for row in out.lines() {
                assert_eq!(row.chars().count(), 40);
            }
        }
    }

    #[test]
    fn bordered_wrap_uses_double_line_palette() {
        let config = FormatConfig {
            border: true,
            ..FormatConfig::default()
        };
        let out = render_plain("AB CD EFGHIJKLMNOPQRSTUVWXYZABCDEF GHIJKLMNO", &config);
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows.len() > 3, "expected wrapped content plus rules");
        assert!(rows[0].starts_with('╔') && rows[0].ends_with('╗'));
        assert!(rows.last().unwrap().starts_with('╚'));
        for row in &rows[1..rows.len() - 1] {
            assert!(row.starts_with('║') && row.ends_with('║'));
            assert_eq!(row.chars().count(), 40);
        }
    }
}
