/// Configuration, types, and shared structures for petsciify.
///
/// This crate contains all shared types used across the petsciify
/// workspace: the render configuration, the big-font glyph table,
/// character ramps, border palettes, and the pixel buffer.
pub mod border;
pub mod charset;
pub mod config;
pub mod error;
pub mod font;
pub mod frame;

pub use border::BorderPalette;
pub use config::{FormatConfig, ImageStyle, SCREEN_WIDTH};
pub use error::CoreError;
pub use font::Glyph;
pub use frame::PixelBuffer;
