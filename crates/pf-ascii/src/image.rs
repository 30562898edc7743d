//! Image-to-ASCII conversion: brightness ramps, half-block 1-bit
//! rendering, and gradient-direction edge glyphs.
//!
//! The caller resamples the source to [`target_dims`] first; this
//! module only maps cells of an exactly-sized buffer to characters.

use std::f64::consts::PI;

use pf_core::border::BorderPalette;
use pf_core::charset::Ramp;
use pf_core::config::{FormatConfig, ImageStyle};
use pf_core::error::CoreError;
use pf_core::frame::PixelBuffer;

use crate::wrap::frame_lines;

/// Edge-magnitude threshold below which a cell stays blank.
const EDGE_FAINT: f64 = 25.0;
/// Threshold below which a faint edge renders as `.`.
const EDGE_WEAK: f64 = 60.0;

/// Pixel dimensions the source must be resampled to for the given
/// configuration.
///
/// Columns = content width. Rows = `max(1, floor(cols × h/w × aspect))`
/// with the aspect correction 0.5 for the shade style and 0.55
/// otherwise; a non-finite ratio clamps to 1 row. The half-block style
/// samples two source rows per output row, so its pixel height doubles.
///
/// # Errors
/// Returns `CoreError::InvalidDimensions` for a zero-sized source.
pub fn target_dims(
    width: u32,
    height: u32,
    config: &FormatConfig,
) -> Result<(u32, u32), CoreError> {
    if width == 0 || height == 0 {
        return Err(CoreError::InvalidDimensions { width, height });
    }

    let cols = config.content_width() as u32;
    let aspect = if config.image_style == ImageStyle::Shade {
        0.5
    } else {
        0.55
    };
    let rows_f = f64::from(cols) * (f64::from(height) / f64::from(width)) * aspect;
    let rows = if rows_f.is_finite() {
        (rows_f.floor() as i64).max(1) as u32
    } else {
        1
    };

    match config.image_style {
        ImageStyle::HalfBlocks => Ok((cols, rows * 2)),
        _ => Ok((cols, rows)),
    }
}

/// Convert an exactly-sized pixel buffer to a framed character grid.
///
/// `frame` must already have the dimensions returned by [`target_dims`].
///
/// # Example
/// ```
/// use pf_ascii::image::{rasterize, target_dims};
/// use pf_core::config::{FormatConfig, ImageStyle};
/// use pf_core::frame::PixelBuffer;
/// let config = FormatConfig { image_style: ImageStyle::Shade, ..FormatConfig::default() };
/// let frame = PixelBuffer::new(40, 10);
/// let out = rasterize(&frame, &config);
/// assert_eq!(out.lines().count(), 10);
/// ```
#[must_use]
pub fn rasterize(frame: &PixelBuffer, config: &FormatConfig) -> String {
    let rows = match config.image_style {
        ImageStyle::Shade => map_ramp(frame, &Ramp::shade()),
        ImageStyle::Blocks => map_ramp(frame, &Ramp::blocks()),
        ImageStyle::HalfBlocks => map_halfblocks(frame),
        ImageStyle::Outline => map_edges(frame),
    };

    frame_lines(
        &rows,
        config.content_width(),
        config.border,
        BorderPalette::for_mode(config.bbs_mode),
    )
}

/// One ramp character per cell, indexed by mean-RGB brightness.
fn map_ramp(frame: &PixelBuffer, ramp: &Ramp) -> Vec<String> {
    let mut rows = Vec::with_capacity(frame.height as usize);
    for y in 0..frame.height {
        let mut row = String::with_capacity(frame.width as usize);
        for x in 0..frame.width {
            row.push(ramp.map(frame.brightness(x, y)));
        }
        rows.push(row);
    }
    rows
}

/// 1-bit half-block rendering: two vertically stacked source pixels per
/// cell, each thresholded at 128.
fn map_halfblocks(frame: &PixelBuffer) -> Vec<String> {
    let out_rows = frame.height.div_ceil(2);
    let mut rows = Vec::with_capacity(out_rows as usize);
    for cy in 0..out_rows {
        let mut row = String::with_capacity(frame.width as usize);
        for x in 0..frame.width {
            let top = frame.brightness(x, cy * 2) >= 128;
            let bot = cy * 2 + 1 < frame.height && frame.brightness(x, cy * 2 + 1) >= 128;
            row.push(match (top, bot) {
                (true, true) => '█',
                (true, false) => '▀',
                (false, true) => '▄',
                (false, false) => ' ',
            });
        }
        rows.push(row);
    }
    rows
}

/// Brightness sample with a hard dark virtual border: out-of-bounds
/// neighbors read as 0, visibly darkening edge-adjacent gradients.
fn sample(frame: &PixelBuffer, x: i64, y: i64) -> f64 {
    if x < 0 || y < 0 || x >= i64::from(frame.width) || y >= i64::from(frame.height) {
        return 0.0;
    }
    f64::from(frame.brightness(x as u32, y as u32))
}

/// Central-difference gradient per cell, classified into `| / \ -` by
/// angle, with two magnitude thresholds for blank and faint cells.
fn map_edges(frame: &PixelBuffer) -> Vec<String> {
    let mut rows = Vec::with_capacity(frame.height as usize);
    for y in 0..frame.height {
        let mut row = String::with_capacity(frame.width as usize);
        for x in 0..frame.width {
            let (xi, yi) = (i64::from(x), i64::from(y));
            let dx = sample(frame, xi + 1, yi) - sample(frame, xi - 1, yi);
            let dy = sample(frame, xi, yi + 1) - sample(frame, xi, yi - 1);
            let mag = (dx * dx + dy * dy).sqrt();

            row.push(if mag < EDGE_FAINT {
                ' '
            } else if mag < EDGE_WEAK {
                '.'
            } else {
                edge_char(dx, dy)
            });
        }
        rows.push(row);
    }
    rows
}

/// Select a direction glyph from the gradient angle.
fn edge_char(dx: f64, dy: f64) -> char {
    let ang = dy.atan2(dx);
    let a = ang.abs();
    if (a - PI / 2.0).abs() < PI / 8.0 {
        '|'
    } else if ang > 0.0 && (PI / 8.0..=3.0 * PI / 8.0).contains(&a) {
        '/'
    } else if ang < 0.0 && (PI / 8.0..=3.0 * PI / 8.0).contains(&a) {
        '\\'
    } else {
        '-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style_config(style: ImageStyle) -> FormatConfig {
        FormatConfig {
            image_style: style,
            ..FormatConfig::default()
        }
    }

    fn solid(width: u32, height: u32, level: u8) -> PixelBuffer {
        let mut pb = PixelBuffer::new(width, height);
        for px in pb.data.chunks_mut(4) {
            px.copy_from_slice(&[level, level, level, 255]);
        }
        pb
    }

    #[test]
    fn target_dims_applies_aspect_per_style() {
        let config = style_config(ImageStyle::Shade);
        // 40 × (100/100) × 0.5 = 20
        assert_eq!(target_dims(100, 100, &config).unwrap(), (40, 20));

        let config = style_config(ImageStyle::Outline);
        // 40 × 1 × 0.55 = 22
        assert_eq!(target_dims(100, 100, &config).unwrap(), (40, 22));

        let config = style_config(ImageStyle::HalfBlocks);
        assert_eq!(target_dims(100, 100, &config).unwrap(), (40, 44));
    }

    #[test]
    fn target_dims_clamps_to_one_row() {
        let config = style_config(ImageStyle::Shade);
        // 40 × (1/4000) × 0.5 = 0.005 → floor 0 → clamp 1
        assert_eq!(target_dims(4000, 1, &config).unwrap(), (40, 1));
    }

    #[test]
    fn target_dims_rejects_zero_sized_source() {
        let config = FormatConfig::default();
        assert!(target_dims(0, 10, &config).is_err());
        assert!(target_dims(10, 0, &config).is_err());
    }

    #[test]
    fn checkerboard_maps_to_ramp_extremes() {
        let mut pb = PixelBuffer::new(2, 1);
        pb.data[..4].copy_from_slice(&[255, 255, 255, 255]);
        pb.data[4..].copy_from_slice(&[0, 0, 0, 255]);

        let config = style_config(ImageStyle::Shade);
        let out = rasterize(&pb, &config);
        let row = out.lines().next().unwrap();
        assert_eq!(&row.chars().take(2).collect::<String>(), "@ ");
    }

    #[test]
    fn flat_image_has_no_edges() {
        let pb = solid(10, 5, 200);
        let config = style_config(ImageStyle::Outline);
        let out = rasterize(&pb, &config);
        // Interior is flat; only the virtual dark border shows up.
        let middle = out.lines().nth(2).unwrap();
        let interior: String = middle.chars().skip(2).take(6).collect();
        assert_eq!(interior, "      ");
    }

    #[test]
    fn virtual_border_darkens_edge_gradients() {
        let pb = solid(10, 5, 200);
        let config = style_config(ImageStyle::Outline);
        let out = rasterize(&pb, &config);
        let first = out.lines().next().unwrap();
        // Top-row cells see brightness 0 above them: strong vertical step.
        assert_ne!(first.chars().next().unwrap(), ' ');
    }

    #[test]
    fn halfblocks_threshold_patterns() {
        let mut pb = PixelBuffer::new(1, 2);
        pb.data[..4].copy_from_slice(&[255, 255, 255, 255]);
        pb.data[4..].copy_from_slice(&[0, 0, 0, 255]);

        let config = style_config(ImageStyle::HalfBlocks);
        let out = rasterize(&pb, &config);
        assert_eq!(out.lines().next().unwrap().chars().next().unwrap(), '▀');
    }

    #[test]
    fn edge_char_angle_classification() {
        assert_eq!(edge_char(0.0, 100.0), '|');
        assert_eq!(edge_char(0.0, -100.0), '|');
        assert_eq!(edge_char(100.0, 0.0), '-');
        assert_eq!(edge_char(-100.0, 0.0), '-');
        assert_eq!(edge_char(100.0, 100.0), '/');
        assert_eq!(edge_char(100.0, -100.0), '\\');
    }

    #[test]
    fn bordered_raster_uses_selected_palette() {
        let pb = solid(38, 4, 128);
        let config = FormatConfig {
            border: true,
            bbs_mode: true,
            image_style: ImageStyle::Blocks,
            ..FormatConfig::default()
        };
        let out = rasterize(&pb, &config);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], format!("+{}+", "-".repeat(38)));
        for row in &rows[1..rows.len() - 1] {
            assert!(row.starts_with('|') && row.ends_with('|'));
            assert_eq!(row.chars().count(), 40);
        }
    }
}
