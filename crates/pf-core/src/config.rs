use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Target terminal width in columns (C64-style screen).
pub const SCREEN_WIDTH: usize = 40;

/// Character selection strategy for the image rasterizer.
///
/// # Example
/// ```
/// use pf_core::config::ImageStyle;
/// let style = ImageStyle::default();
/// assert!(matches!(style, ImageStyle::Outline));
/// ```
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageStyle {
    /// 10-step density ramp `" .:-=+*#%@"`.
    Shade,
    /// 5-step Unicode block ramp `" ░▒▓█"`.
    Blocks,
    /// 1-bit half-block rendering (▀/▄/█), two source rows per cell.
    HalfBlocks,
    /// Gradient-direction edge glyphs (`| / \ -`).
    #[default]
    Outline,
}

/// Immutable render configuration, one value per call.
///
/// Serializable to TOML; every field has a defined default, so a partial
/// config file (or none at all) is always valid.
///
/// # Example
/// ```
/// use pf_core::config::FormatConfig;
/// let config = FormatConfig::default();
/// assert_eq!(config.content_width(), 40);
/// assert!(!config.big_text_active());
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Force the whole input to uppercase.
    pub uppercase: bool,
    /// Draw a frame around the output (costs 2 columns).
    pub border: bool,
    /// Replace ASCII printables with their Unicode fullwidth counterparts.
    /// Ignored when `bbs_mode` is set.
    pub block_simulate: bool,
    /// Render text with the 3-row big font.
    pub big_text: bool,
    /// Center each rendered row instead of left-aligning.
    pub center: bool,
    /// Big font with 4-column cells, filled with the letter itself.
    pub four_column: bool,
    /// Big font post-processed into its `+ - | .` edge outline.
    pub ascii_outline: bool,
    /// ASCII-only styling: plain borders, symmetric 4-column stretch,
    /// no block-drawing glyphs.
    pub bbs_mode: bool,
    /// Strategy used when the input is an image.
    pub image_style: ImageStyle,
}

impl FormatConfig {
    /// Columns available for content, after border sentinels.
    #[must_use]
    pub fn content_width(&self) -> usize {
        if self.border {
            SCREEN_WIDTH - 2
        } else {
            SCREEN_WIDTH
        }
    }

    /// True when any flag routes rendering through the big-text path.
    ///
    /// `bbs_mode` alone does not: it only restyles whichever path is
    /// already active.
    #[must_use]
    pub fn big_text_active(&self) -> bool {
        self.big_text || self.four_column || self.ascii_outline
    }

    /// True when the input must be uppercased before rendering.
    #[must_use]
    pub fn force_uppercase(&self) -> bool {
        self.uppercase || self.big_text_active() || self.bbs_mode
    }
}

/// Load a TOML config file, merging with defaults for missing fields.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use pf_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("petsciify.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<FormatConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;

    let config: FormatConfig = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    Ok(config)
}
