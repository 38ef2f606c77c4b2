use crate::arrow_utils::direction_triangle;
use crate::color_utils::{segment_color, Rgba8};
use crate::pattern::Pattern;
use crate::settings::RenderSettings;
use crate::stroke_utils::{debug_dot_pixels, stroke_width_pixels};
use crate::utils::{save_png_with_quality, PatternLayout};
use anyhow::{Context, Result};
use euclid::default::Point2D;
use log::{debug, info};
use palette::Srgba;
use rough_tiny_skia::SkiaGenerator;
use roughr::core::{FillStyle, Options, OptionsBuilder};
use std::path::Path;
use tiny_skia::*;

/// Spreads per-segment seeds apart so neighbouring frames don't just
/// shift the same wiggle one segment along
const SEGMENT_SEED_STRIDE: u64 = 1009;

struct StrokeStyle {
    color: Rgba8,
    width: f32,
    roughness: f32,
    seed: u64,
}

fn rough_options(style: &StrokeStyle, filled: bool) -> Result<Options> {
    let (r, g, b, a) = style.color;
    let color = Srgba::from_components((r, g, b, a)).into_format();

    let mut builder = OptionsBuilder::default();
    builder.stroke(color);
    builder.stroke_width(style.width);
    builder.roughness(style.roughness);
    builder.seed(style.seed);
    if filled {
        builder.fill(color);
        builder.fill_style(FillStyle::Solid);
    }

    builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build stroke options: {e}"))
}

fn draw_segment(
    pixmap: &mut Pixmap,
    from: (f64, f64),
    to: (f64, f64),
    style: &StrokeStyle,
    show_direction: bool,
) -> Result<()> {
    let generator = SkiaGenerator::new(rough_options(style, false)?);
    let d = format!("M {} {} L {} {}", from.0, from.1, to.0, to.1);
    generator.path::<f32>(d).draw(&mut pixmap.as_mut());

    if show_direction {
        if let Some(triangle) = direction_triangle(from, to) {
            let generator = SkiaGenerator::new(rough_options(style, true)?);
            let points: Vec<Point2D<f32>> = triangle
                .iter()
                .map(|(x, y)| Point2D::new(*x as f32, *y as f32))
                .collect();
            generator.polygon(&points).draw(&mut pixmap.as_mut());
        }
    }

    Ok(())
}

fn fill_circle(pixmap: &mut Pixmap, center: (f64, f64), radius: f64, color: Rgba8) {
    let Some(path) = PathBuilder::from_circle(center.0 as f32, center.1 as f32, radius as f32) else {
        return;
    };
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, color.3);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

/// Bounding box, centroid and vertices, painted flat (no roughness)
fn draw_debug_overlay(pixmap: &mut Pixmap, pattern: &Pattern, layout: &PatternLayout, stroke_width: f64) {
    let bbox = pattern.bounding_box();
    let (min_x, min_y) = layout.to_canvas(bbox.min);
    // Straight lines have a zero-height box; give it a hairline instead
    let width = layout.to_pixels(pattern.width()).max(1.0);
    let height = layout.to_pixels(pattern.height()).max(1.0);
    if let Some(rect) = Rect::from_xywh(min_x as f32, min_y as f32, width as f32, height as f32) {
        let mut paint = Paint::default();
        paint.set_color_rgba8(255, 255, 255, 255);
        pixmap.fill_rect(rect, &paint, Transform::identity(), None);
    }

    let radius = debug_dot_pixels(stroke_width) / 2.0;
    fill_circle(pixmap, layout.to_canvas(pattern.centroid()), radius, (255, 0, 0, 255));
    for vertex in pattern.vertices() {
        fill_circle(pixmap, layout.to_canvas(*vertex), radius, (0, 0, 0, 255));
    }
}

/// Rasterize one animation frame of a pattern.
///
/// With `animate_pattern` on, every frame uses a different seed so the
/// strokes wiggle from frame to frame. With it off, strokes are flat and
/// all frames are identical.
pub fn render_pattern(
    pattern: &Pattern,
    settings: &RenderSettings,
    frame: u64,
    background: Option<Rgba8>,
) -> Result<Pixmap> {
    settings.validate().context("Invalid render settings")?;
    let start = settings.start_color()?;
    let end = settings.end_color()?;

    let layout = PatternLayout::new(pattern, settings.pattern_size);
    let mut pixmap = Pixmap::new(settings.pattern_size, settings.pattern_size)
        .ok_or_else(|| anyhow::anyhow!("Failed to create pixmap"))?;

    if let Some((r, g, b, a)) = background {
        if a > 0 {
            pixmap.fill(Color::from_rgba8(r, g, b, a));
        }
    }

    let stroke_width = stroke_width_pixels(settings.stroke_width, layout.scale);
    if settings.debug_overlay {
        draw_debug_overlay(&mut pixmap, pattern, &layout, stroke_width);
    }

    let frame_seed = settings.frame_seed(frame);
    let count = pattern.segment_count();
    for (i, (from, to)) in pattern.segments().enumerate() {
        let style = StrokeStyle {
            color: segment_color(start, end, i, count),
            width: stroke_width as f32,
            roughness: settings.effective_roughness() as f32,
            seed: frame_seed
                .wrapping_mul(SEGMENT_SEED_STRIDE)
                .wrapping_add(i as u64 + 1),
        };
        draw_segment(
            &mut pixmap,
            layout.to_canvas(from),
            layout.to_canvas(to),
            &style,
            settings.direction_indicator,
        )
        .with_context(|| format!("Failed to draw segment {i}"))?;
    }

    debug!("Rendered frame {frame} of {pattern} (seed {frame_seed})");
    Ok(pixmap)
}

/// Render `count` consecutive frames starting at frame 0
pub fn render_frames(
    pattern: &Pattern,
    settings: &RenderSettings,
    count: u64,
    background: Option<Rgba8>,
) -> Result<Vec<Pixmap>> {
    (0..count)
        .map(|frame| render_pattern(pattern, settings, frame, background))
        .collect()
}

pub fn render_to_png(
    pattern: &Pattern,
    settings: &RenderSettings,
    frame: u64,
    output_path: &Path,
    background: Option<Rgba8>,
    quality: u8,
) -> Result<()> {
    let pixmap = render_pattern(pattern, settings, frame, background)?;
    save_png_with_quality(&pixmap, output_path, quality)?;
    info!("Wrote frame {frame} to {}", output_path.display());
    Ok(())
}
