/// Frame glyph set: four corners, horizontal rule, vertical sentinel.
///
/// # Example
/// ```
/// use pf_core::border::BorderPalette;
/// let p = BorderPalette::for_mode(false);
/// assert_eq!(p.top_left, '╔');
/// let p = BorderPalette::for_mode(true);
/// assert_eq!(p.horizontal, '-');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BorderPalette {
    /// Top-left corner.
    pub top_left: char,
    /// Top-right corner.
    pub top_right: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom-right corner.
    pub bottom_right: char,
    /// Horizontal rule segment.
    pub horizontal: char,
    /// Vertical sentinel.
    pub vertical: char,
}

/// Double-line box drawing, the default frame.
pub const DOUBLE_LINE: BorderPalette = BorderPalette {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

/// Plain ASCII frame for BBS mode.
pub const PLAIN_ASCII: BorderPalette = BorderPalette {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
};

impl BorderPalette {
    /// Select the palette for the given BBS flag.
    #[must_use]
    pub fn for_mode(bbs_mode: bool) -> Self {
        if bbs_mode { PLAIN_ASCII } else { DOUBLE_LINE }
    }

    /// Top rule: corner + `width` horizontal segments + corner.
    #[must_use]
    pub fn top_rule(&self, width: usize) -> String {
        let mut rule = String::with_capacity(width + 2);
        rule.push(self.top_left);
        for _ in 0..width {
            rule.push(self.horizontal);
        }
        rule.push(self.top_right);
        rule
    }

    /// Bottom rule: corner + `width` horizontal segments + corner.
    #[must_use]
    pub fn bottom_rule(&self, width: usize) -> String {
        let mut rule = String::with_capacity(width + 2);
        rule.push(self.bottom_left);
        for _ in 0..width {
            rule.push(self.horizontal);
        }
        rule.push(self.bottom_right);
        rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_selection() {
        assert_eq!(BorderPalette::for_mode(false), DOUBLE_LINE);
        assert_eq!(BorderPalette::for_mode(true), PLAIN_ASCII);
    }

    #[test]
    fn rules_have_width_plus_corners() {
        let rule = DOUBLE_LINE.top_rule(38);
        assert_eq!(rule.chars().count(), 40);
        assert!(rule.starts_with('╔') && rule.ends_with('╗'));

        let rule = PLAIN_ASCII.bottom_rule(3);
        assert_eq!(rule, "+---+");
    }
}
