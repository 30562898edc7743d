/// Pixel sources for petsciify: image decoding and resampling.
pub mod image;
pub mod resize;
