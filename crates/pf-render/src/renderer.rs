//! Stage selection and the last-image input slot.
//!
//! Rendering is pure and synchronous: every call either returns the
//! complete formatted string or a single error, never partial output.

use anyhow::Result;
use pf_core::config::FormatConfig;
use pf_core::frame::PixelBuffer;

/// One render input: typed text or a decoded image.
pub enum RenderInput<'a> {
    /// Raw text, wrapped or big-font rendered per configuration.
    Text(&'a str),
    /// Decoded RGBA pixels, converted per the configured image style.
    Image(&'a PixelBuffer),
}

/// Render an input into the final formatted grid string.
///
/// # Errors
/// Returns an error for a zero-sized image or a failed resample.
///
/// # Example
/// ```
/// use pf_core::config::FormatConfig;
/// use pf_render::renderer::{RenderInput, render};
/// let out = render(RenderInput::Text("hi"), &FormatConfig::default()).unwrap();
/// assert_eq!(out.chars().count(), 40);
/// ```
pub fn render(input: RenderInput<'_>, config: &FormatConfig) -> Result<String> {
    match input {
        RenderInput::Text(text) => {
            if config.big_text_active() {
                Ok(pf_ascii::bigtext::render_big(text, config))
            } else {
                Ok(pf_ascii::plain::render_plain(text, config))
            }
        }
        RenderInput::Image(pixels) => render_image(pixels, config),
    }
}

fn render_image(pixels: &PixelBuffer, config: &FormatConfig) -> Result<String> {
    let (cols, rows) = pf_ascii::image::target_dims(pixels.width, pixels.height, config)?;
    log::debug!(
        "image raster: {}×{} → {cols}×{rows} cells",
        pixels.width,
        pixels.height
    );
    let resampled = pf_source::resize::resize_frame(pixels, cols, rows)?;
    Ok(pf_ascii::image::rasterize(&resampled, config))
}

/// Render orchestrator holding the most recently supplied image.
///
/// The slot exists so a configuration change can re-run the image
/// pipeline without the caller re-supplying pixels. Last-write-wins,
/// single caller, no interior mutability.
///
/// # Example
/// ```
/// use pf_core::config::FormatConfig;
/// use pf_render::renderer::Renderer;
/// let renderer = Renderer::new();
/// let out = renderer.render_current("hi", &FormatConfig::default()).unwrap();
/// assert!(out.starts_with("hi"));
/// ```
#[derive(Default)]
pub struct Renderer {
    last_image: Option<PixelBuffer>,
}

impl Renderer {
    /// Create an orchestrator with an empty image slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached image.
    pub fn set_image(&mut self, image: PixelBuffer) {
        self.last_image = Some(image);
    }

    /// Drop the cached image; subsequent renders use text again.
    pub fn clear_image(&mut self) {
        self.last_image = None;
    }

    /// Whether an image is currently cached.
    #[must_use]
    pub fn has_image(&self) -> bool {
        self.last_image.is_some()
    }

    /// Render with the current configuration: the cached image when one
    /// is set, the given text otherwise.
    ///
    /// # Errors
    /// Returns an error if the image pipeline fails.
    pub fn render_current(&self, text: &str, config: &FormatConfig) -> Result<String> {
        match &self.last_image {
            Some(image) => render(RenderInput::Image(image), config),
            None => render(RenderInput::Text(text), config),
        }
    }
}
