/// Decoded pixel buffer, RGBA row-major, 4 bytes per pixel.
///
/// # Example
/// ```
/// use pf_core::frame::PixelBuffer;
/// let pb = PixelBuffer::new(10, 10);
/// assert_eq!(pb.data.len(), 400);
/// ```
#[derive(Clone)]
pub struct PixelBuffer {
    /// RGBA pixels, row-major, 4 bytes per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelBuffer {
    /// Create a zeroed buffer with the given dimensions.
    ///
    /// # Example
    /// ```
    /// use pf_core::frame::PixelBuffer;
    /// let pb = PixelBuffer::new(100, 50);
    /// assert_eq!(pb.width, 100);
    /// assert_eq!(pb.data.len(), 100 * 50 * 4);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height * 4) as usize],
            width,
            height,
        }
    }

    /// Wrap an already-decoded RGBA byte vector.
    ///
    /// Returns `None` if the vector length does not match the dimensions.
    #[must_use]
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Option<Self> {
        if data.len() != (width as usize) * (height as usize) * 4 {
            return None;
        }
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Pixel at (x, y) → (r, g, b, a).
    ///
    /// # Example
    /// ```
    /// use pf_core::frame::PixelBuffer;
    /// let pb = PixelBuffer::new(10, 10);
    /// assert_eq!(pb.pixel(0, 0), (0, 0, 0, 0));
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> (u8, u8, u8, u8) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = ((y * self.width + x) * 4) as usize;
        if idx + 3 >= self.data.len() {
            return (0, 0, 0, 0);
        }
        (
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        )
    }

    /// Plain-average brightness: (R + G + B) / 3.
    ///
    /// # Example
    /// ```
    /// use pf_core::frame::PixelBuffer;
    /// let mut pb = PixelBuffer::new(1, 1);
    /// pb.data.copy_from_slice(&[255, 255, 255, 255]);
    /// assert_eq!(pb.brightness(0, 0), 255);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn brightness(&self, x: u32, y: u32) -> u8 {
        let (r, g, b, _) = self.pixel(x, y);
        ((u32::from(r) + u32::from(g) + u32::from(b)) / 3) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rgba_rejects_mismatched_length() {
        assert!(PixelBuffer::from_rgba(vec![0u8; 12], 2, 2).is_none());
        assert!(PixelBuffer::from_rgba(vec![0u8; 16], 2, 2).is_some());
    }

    #[test]
    fn brightness_is_mean_of_channels() {
        let mut pb = PixelBuffer::new(1, 1);
        pb.data.copy_from_slice(&[30, 60, 90, 255]);
        assert_eq!(pb.brightness(0, 0), 60);
    }
}
