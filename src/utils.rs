use anyhow::Result;
use std::path::Path;
use tiny_skia::Pixmap;

use crate::models::{Point, ViewBox};
use crate::pattern::Pattern;

/// Fraction of the canvas kept free on each side
const PADDING_FRACTION: f64 = 0.1;
/// A single segment never spans more than this fraction of the canvas
const MAX_SEGMENT_FRACTION: f64 = 0.25;

/// Save a pixmap to PNG with compression quality control (0-100).
/// Maps 0-100 to PNG compression types:
/// - 0-25: Fast (fastest encoding, larger files)
/// - 26-75: Default (balanced)
/// - 76-100: Best (slowest encoding, smallest files)
pub fn save_png_with_quality(pixmap: &Pixmap, output_path: &Path, quality: u8) -> Result<()> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(output_path)
        .map_err(|e| anyhow::anyhow!("Failed to create PNG file: {e}"))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_filter(png::FilterType::Paeth);

    let compression_type = if quality <= 25 {
        png::Compression::Fast
    } else if quality <= 75 {
        png::Compression::Default
    } else {
        png::Compression::Best
    };
    encoder.set_compression(compression_type);

    let mut writer = encoder
        .write_header()
        .map_err(|e| anyhow::anyhow!("Failed to write PNG header: {e}"))?;

    // tiny-skia stores premultiplied RGBA; PNG wants straight alpha
    let data: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    writer
        .write_image_data(&data)
        .map_err(|e| anyhow::anyhow!("Failed to write PNG data: {e}"))?;

    Ok(())
}

/// Square canvas covering `size` pixels
pub fn calculate_viewbox(size: u32) -> ViewBox {
    ViewBox {
        min_x: 0.0,
        min_y: 0.0,
        width: size as f64,
        height: size as f64,
    }
}

/// Maps pattern units onto a square canvas, with the pattern's centroid at
/// the canvas center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternLayout {
    pub viewbox: ViewBox,
    /// Pixels per pattern unit
    pub scale: f64,
    centroid: Point,
}

impl PatternLayout {
    pub fn new(pattern: &Pattern, size: u32) -> Self {
        let viewbox = calculate_viewbox(size);
        let size = size as f64;
        let centroid = pattern.centroid();
        let bbox = pattern.bounding_box();

        // Centering on the centroid rather than the box center means the
        // drawing is lopsided; fit the larger half on both sides.
        let half_x = (centroid.x - bbox.min.x).max(bbox.max.x - centroid.x);
        let half_y = (centroid.y - bbox.min.y).max(bbox.max.y - centroid.y);
        let extent = 2.0 * half_x.max(half_y);

        let available = size * (1.0 - 2.0 * PADDING_FRACTION);
        let max_scale = size * MAX_SEGMENT_FRACTION;
        let scale = if extent > 0.0 {
            (available / extent).min(max_scale)
        } else {
            max_scale
        };

        Self {
            viewbox,
            scale,
            centroid,
        }
    }

    /// Canvas position of a pattern point
    pub fn to_canvas(&self, point: Point) -> (f64, f64) {
        (
            self.viewbox.min_x + self.viewbox.width / 2.0 + (point.x - self.centroid.x) * self.scale,
            self.viewbox.min_y + self.viewbox.height / 2.0 + (point.y - self.centroid.y) * self.scale,
        )
    }

    /// Convert a length in pattern units to pixels
    pub fn to_pixels(&self, length: f64) -> f64 {
        length * self.scale
    }
}
