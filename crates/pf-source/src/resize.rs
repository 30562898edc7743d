use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};
use pf_core::frame::PixelBuffer;

/// Reusable resampler wrapping fast_image_resize.
///
/// # Example
/// ```
/// use pf_source::resize::Resizer;
/// let r = Resizer::new();
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
    /// Scratch copy of the source (the resize API wants `&mut` bytes).
    src_buf: Vec<u8>,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
            src_buf: Vec::new(),
        }
    }

    /// Resample `src` into `dst`; `dst`'s dimensions select the output
    /// size. Same-size inputs are copied through.
    ///
    /// # Errors
    /// Returns an error if either buffer has invalid dimensions or the
    /// resample fails.
    ///
    /// # Example
    /// ```
    /// use pf_source::resize::Resizer;
    /// use pf_core::frame::PixelBuffer;
    /// let mut r = Resizer::new();
    /// let src = PixelBuffer::new(100, 100);
    /// let mut dst = PixelBuffer::new(40, 22);
    /// r.resize_into(&src, &mut dst).unwrap();
    /// ```
    pub fn resize_into(&mut self, src: &PixelBuffer, dst: &mut PixelBuffer) -> Result<()> {
        if src.width == dst.width && src.height == dst.height {
            dst.data.copy_from_slice(&src.data);
            return Ok(());
        }

        self.src_buf.clear();
        self.src_buf.extend_from_slice(&src.data);

        let src_image =
            Image::from_slice_u8(src.width, src.height, &mut self.src_buf, PixelType::U8x4)
                .context("invalid source dimensions")?;

        let mut dst_image =
            Image::from_slice_u8(dst.width, dst.height, &mut dst.data, PixelType::U8x4)
                .context("invalid destination dimensions")?;

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("resample failed")?;

        Ok(())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot convenience resample.
///
/// # Errors
/// Returns an error if the resample fails.
///
/// # Example
/// ```
/// use pf_source::resize::resize_frame;
/// use pf_core::frame::PixelBuffer;
/// let src = PixelBuffer::new(100, 100);
/// let dst = resize_frame(&src, 40, 22).unwrap();
/// assert_eq!(dst.width, 40);
/// ```
pub fn resize_frame(src: &PixelBuffer, width: u32, height: u32) -> Result<PixelBuffer> {
    let mut dst = PixelBuffer::new(width, height);
    let mut resizer = Resizer::new();
    resizer.resize_into(src, &mut dst)?;
    Ok(dst)
}
