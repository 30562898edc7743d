use std::path::PathBuf;

use clap::Parser;
use pf_core::config::{FormatConfig, ImageStyle};

/// petsciify — retro 40-column text and ASCII-art formatter.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Text to format. Read from stdin when omitted and no --image is given.
    pub text: Option<String>,

    /// Render an image file instead of text (PNG, JPEG, BMP, GIF).
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Optional TOML configuration file; flags below override it.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Image style: shade, blocks, halfblocks, outline.
    #[arg(long)]
    pub style: Option<String>,

    /// Force uppercase.
    #[arg(long, default_value_t = false)]
    pub uppercase: bool,

    /// Draw a border frame.
    #[arg(long, default_value_t = false)]
    pub border: bool,

    /// Fullwidth "block" character simulation.
    #[arg(long, default_value_t = false)]
    pub block: bool,

    /// Big 3-row font.
    #[arg(long, default_value_t = false)]
    pub big: bool,

    /// Center each row.
    #[arg(long, default_value_t = false)]
    pub center: bool,

    /// Four-column big font filled with the letters themselves.
    #[arg(long = "four-col", default_value_t = false)]
    pub four_col: bool,

    /// Big font rendered as its edge outline.
    #[arg(long, default_value_t = false)]
    pub outline: bool,

    /// BBS mode: plain-ASCII borders and big font.
    #[arg(long, default_value_t = false)]
    pub bbs: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Overlay CLI flags onto a (possibly file-loaded) configuration.
    /// Flags only switch features on; the file remains the baseline.
    pub fn apply_overrides(&self, config: &mut FormatConfig) {
        config.uppercase |= self.uppercase;
        config.border |= self.border;
        config.block_simulate |= self.block;
        config.big_text |= self.big;
        config.center |= self.center;
        config.four_column |= self.four_col;
        config.ascii_outline |= self.outline;
        config.bbs_mode |= self.bbs;

        if let Some(ref style) = self.style {
            config.image_style = match style.as_str() {
                "shade" => ImageStyle::Shade,
                "blocks" => ImageStyle::Blocks,
                "halfblocks" => ImageStyle::HalfBlocks,
                "outline" => ImageStyle::Outline,
                other => {
                    log::warn!("unknown style '{other}', keeping {:?}", config.image_style);
                    config.image_style
                }
            };
        }
    }
}
