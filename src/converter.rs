use anyhow::Result;
use log::info;
use resvg::usvg::{self, Tree};
use std::path::Path;
use tiny_skia::Pixmap;

use crate::color_utils::Rgba8;
use crate::utils::save_png_with_quality;

/// Rasterize an SVG document with resvg. Patterns carry no text, so the
/// default (empty) font database is enough.
pub fn rasterize_svg(svg_content: &str, background: Option<Rgba8>) -> Result<Pixmap> {
    let options = usvg::Options::default();
    let tree = Tree::from_str(svg_content, &options)?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to create pixmap"))?;

    if let Some((r, g, b, a)) = background {
        if a > 0 {
            pixmap.fill(tiny_skia::Color::from_rgba8(r, g, b, a));
        }
    }

    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}

pub fn convert_svg_to_png(
    svg_content: &str,
    output_path: &Path,
    background: Option<Rgba8>,
    quality: u8,
) -> Result<()> {
    let pixmap = rasterize_svg(svg_content, background)?;
    save_png_with_quality(&pixmap, output_path, quality)?;
    info!("Wrote {}", output_path.display());
    Ok(())
}
