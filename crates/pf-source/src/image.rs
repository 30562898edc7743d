use std::path::Path;

use anyhow::{Context, Result};
use pf_core::frame::PixelBuffer;

/// Decode an image file into an RGBA pixel buffer.
///
/// # Errors
/// Returns an error if the file cannot be read or decoded.
///
/// # Example
/// ```no_run
/// use pf_source::image::load_image;
/// use std::path::Path;
/// let frame = load_image(Path::new("input.png")).unwrap();
/// ```
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = image::open(path).with_context(|| format!("cannot load {}", path.display()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("decoded {}: {width}×{height}", path.display());
    Ok(PixelBuffer {
        data: rgba.into_raw(),
        width,
        height,
    })
}
