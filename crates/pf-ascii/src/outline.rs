//! Outline post-process: collapse a solid bitmap into its boundary.
//!
//! Every non-blank cell is classified by its 4-neighborhood within the
//! row grid. A cell missing a left or right neighbor is a horizontal
//! edge, one missing an up or down neighbor a vertical edge.

/// Replace filled rows with their edge outline.
///
/// `+` where both edge directions meet, `-` for horizontal-only, `|`
/// for vertical-only, `.` for interior fill. Blanks stay blank.
///
/// # Example
/// ```
/// use pf_ascii::outline::outline_rows;
/// let rows = vec!["██".to_string(), "██".to_string()];
/// assert_eq!(outline_rows(&rows), vec!["++", "++"]);
/// ```
#[must_use]
pub fn outline_rows(rows: &[String]) -> Vec<String> {
    let grid: Vec<Vec<bool>> = rows
        .iter()
        .map(|r| r.chars().map(|c| c != ' ').collect())
        .collect();
    let height = grid.len();

    let mut out = Vec::with_capacity(height);
    for (r, grid_row) in grid.iter().enumerate() {
        let width = grid_row.len();
        let mut row_str = String::with_capacity(width);
        for c in 0..width {
            if !grid_row[c] {
                row_str.push(' ');
                continue;
            }
            let left = c > 0 && grid_row[c - 1];
            let right = c + 1 < width && grid_row[c + 1];
            let up = r > 0 && grid[r - 1].get(c).copied().unwrap_or(false);
            let down = r + 1 < height && grid[r + 1].get(c).copied().unwrap_or(false);

            let horiz = !left || !right;
            let vert = !up || !down;

            row_str.push(match (horiz, vert) {
                (true, true) => '+',
                (true, false) => '-',
                (false, true) => '|',
                (false, false) => '.',
            });
        }
        out.push(row_str);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_rectangle_outlines_to_corners_edges_interior() {
        let rows: Vec<String> = vec!["█████".into(), "█████".into(), "█████".into()];
        let out = outline_rows(&rows);
        assert_eq!(out[0], "+|||+");
        assert_eq!(out[1], "-...-");
        assert_eq!(out[2], "+|||+");
    }

    #[test]
    fn taller_rectangle_has_dash_rows_top_and_bottom() {
        let rows: Vec<String> = (0..4).map(|_| "████".to_string()).collect();
        let out = outline_rows(&rows);
        assert_eq!(out[0], "+||+");
        assert_eq!(out[1], "-..-");
        assert_eq!(out[2], "-..-");
        assert_eq!(out[3], "+||+");
    }

    #[test]
    fn isolated_cell_is_a_plus() {
        let rows: Vec<String> = vec!["   ".into(), " █ ".into(), "   ".into()];
        assert_eq!(outline_rows(&rows), vec!["   ", " + ", "   "]);
    }

    #[test]
    fn blanks_stay_blank() {
        let rows: Vec<String> = vec!["█ █".into()];
        assert_eq!(outline_rows(&rows), vec!["+ +"]);
    }
}
