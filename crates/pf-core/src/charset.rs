/// 10 characters — classic density ramp, good contrast.
pub const RAMP_SHADE: &str = " .:-=+*#%@";

/// Unicode blocks — pseudo-pixels.
pub const RAMP_BLOCKS: &str = " ░▒▓█";

/// Brightness → character ramp, lightest to densest.
///
/// Built from one of the two fixed charsets; there is no user-supplied
/// ramp. Index formula: `min(len - 1, floor(brightness / 256 × len))`.
///
/// # Example
/// ```
/// use pf_core::charset::Ramp;
/// let ramp = Ramp::shade();
/// assert_eq!(ramp.map(0), ' ');
/// assert_eq!(ramp.map(255), '@');
/// ```
pub struct Ramp {
    chars: Vec<char>,
}

impl Ramp {
    /// The 10-step shade ramp.
    #[must_use]
    pub fn shade() -> Self {
        Self::from_charset(RAMP_SHADE)
    }

    /// The 5-step Unicode block ramp.
    #[must_use]
    pub fn blocks() -> Self {
        Self::from_charset(RAMP_BLOCKS)
    }

    fn from_charset(charset: &str) -> Self {
        Self {
            chars: charset.chars().collect(),
        }
    }

    /// Map a brightness value [0..=255] to a ramp character.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, brightness: u8) -> char {
        let len = self.chars.len();
        let idx = (usize::from(brightness) * len / 256).min(len - 1);
        self.chars[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_maps_extremes() {
        let ramp = Ramp::shade();
        assert_eq!(ramp.map(0), ' ');
        assert_eq!(ramp.map(255), '@');

        let ramp = Ramp::blocks();
        assert_eq!(ramp.map(0), ' ');
        assert_eq!(ramp.map(255), '█');
    }

    #[test]
    fn ramp_monotonic() {
        let ramp = Ramp::shade();
        let chars: Vec<char> = RAMP_SHADE.chars().collect();
        let mut prev_idx = 0usize;
        for i in 0..=255u8 {
            let ch = ramp.map(i);
            let idx = chars.iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "ramp non-monotonic at brightness {i}");
            prev_idx = idx;
        }
    }

    #[test]
    fn blocks_ramp_bucket_boundaries() {
        // 5 buckets of ~51: 0..51 → ' ', 52..102 → '░', …
        let ramp = Ramp::blocks();
        assert_eq!(ramp.map(51), ' ');
        assert_eq!(ramp.map(52), '░');
        assert_eq!(ramp.map(128), '▒');
        assert_eq!(ramp.map(204), '▓');
        assert_eq!(ramp.map(205), '█');
    }

    #[test]
    fn both_ramps_are_usable_over_the_full_domain() {
        for ramp in [Ramp::shade(), Ramp::blocks()] {
            for i in 0..=255u8 {
                let _ = ramp.map(i);
            }
        }
    }
}
