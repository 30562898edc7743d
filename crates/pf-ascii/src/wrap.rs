//! Grid primitives: token splitting, wrapping, padding, centering,
//! and the border-framing step.
//!
//! All widths are measured in `char`s, never bytes — rows may contain
//! multi-byte block-drawing or fullwidth glyphs.

use pf_core::border::BorderPalette;

/// Split a line into alternating runs of non-whitespace and whitespace.
///
/// Whitespace runs are kept as tokens of their own, so interior spacing
/// survives the later packing verbatim (this is deliberately not a
/// collapsing word-wrap).
///
/// # Example
/// ```
/// use pf_ascii::wrap::split_tokens;
/// assert_eq!(split_tokens("a  bc"), vec!["a", "  ", "bc"]);
/// assert!(split_tokens("").is_empty());
/// ```
#[must_use]
pub fn split_tokens(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_space = false;

    for ch in line.chars() {
        let is_space = ch.is_whitespace();
        if !current.is_empty() && is_space != in_space {
            tokens.push(std::mem::take(&mut current));
        }
        in_space = is_space;
        current.push(ch);
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Wrap text to `width` columns.
///
/// Explicit newlines split first; every input line yields at least one
/// output line. A line that already fits passes through verbatim
/// (including empty lines). Longer lines are greedily packed from
/// preserved tokens; a token wider than `width` is hard-chunked, with
/// only the final partial chunk carried forward as the new accumulator.
///
/// # Example
/// ```
/// use pf_ascii::wrap::wrap_text;
/// let lines = wrap_text("hello world", 6);
/// assert_eq!(lines, vec!["hello ", "world"]);
/// assert!(wrap_text("", 10).is_empty());
/// ```
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for input_line in text.split('\n') {
        if input_line.chars().count() <= width {
            lines.push(input_line.to_string());
            continue;
        }

        let mut current = String::new();
        let mut current_len = 0usize;
        for token in split_tokens(input_line) {
            let token_len = token.chars().count();
            if current_len + token_len > width {
                if token_len > width {
                    // Token wider than the line: force break.
                    if !current.is_empty() {
                        lines.push(std::mem::take(&mut current));
                        current_len = 0;
                    }
                    let chars: Vec<char> = token.chars().collect();
                    for chunk in chars.chunks(width) {
                        if chunk.len() == width {
                            lines.push(chunk.iter().collect());
                        } else {
                            current = chunk.iter().collect();
                            current_len = chunk.len();
                        }
                    }
                } else {
                    lines.push(std::mem::take(&mut current));
                    current = token;
                    current_len = token_len;
                }
            } else {
                current.push_str(&token);
                current_len += token_len;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

/// Right-pad with spaces to exactly `width`, or truncate if longer.
///
/// Idempotent: padding an already-padded row is a no-op.
///
/// # Example
/// ```
/// use pf_ascii::wrap::pad_row;
/// assert_eq!(pad_row("ab", 4), "ab  ");
/// assert_eq!(pad_row("abcdef", 4), "abcd");
/// ```
#[must_use]
pub fn pad_row(row: &str, width: usize) -> String {
    let count = row.chars().count();
    if count > width {
        row.chars().take(width).collect()
    } else {
        let mut padded = String::with_capacity(row.len() + (width - count));
        padded.push_str(row);
        for _ in count..width {
            padded.push(' ');
        }
        padded
    }
}

/// Center a short row in `width` columns: `floor(deficit/2)` spaces on
/// the left, the remainder on the right. Rows at or over `width` pass
/// through untouched.
///
/// # Example
/// ```
/// use pf_ascii::wrap::center_row;
/// assert_eq!(center_row("abc", 6), " abc  ");
/// ```
#[must_use]
pub fn center_row(row: &str, width: usize) -> String {
    let count = row.chars().count();
    if count >= width {
        return row.to_string();
    }
    let deficit = width - count;
    let left = deficit / 2;
    let mut centered = String::with_capacity(row.len() + deficit);
    for _ in 0..left {
        centered.push(' ');
    }
    centered.push_str(row);
    for _ in 0..(deficit - left) {
        centered.push(' ');
    }
    centered
}

/// Pad every line to `width` and join with newlines, optionally wrapped
/// in a border frame. No trailing newline.
///
/// # Example
/// ```
/// use pf_ascii::wrap::frame_lines;
/// use pf_core::border::BorderPalette;
/// let lines = vec!["hi".to_string()];
/// let out = frame_lines(&lines, 4, true, BorderPalette::for_mode(true));
/// assert_eq!(out, "+----+\n|hi  |\n+----+");
/// ```
#[must_use]
pub fn frame_lines(
    lines: &[String],
    width: usize,
    border: bool,
    palette: BorderPalette,
) -> String {
    let mut out = Vec::with_capacity(lines.len() + 2);
    if border {
        out.push(palette.top_rule(width));
    }
    for line in lines {
        let padded = pad_row(line, width);
        if border {
            out.push(format!("{}{}{}", palette.vertical, padded, palette.vertical));
        } else {
            out.push(padded);
        }
    }
    if border {
        out.push(palette.bottom_rule(width));
    }
    out.join("\n")
}
