use anyhow::{Context, Result};
use log::debug;
use std::fmt::Write;

use crate::arrow_utils::direction_triangle;
use crate::color_utils::{opacity, segment_color, to_hex, Rgba8};
use crate::pattern::Pattern;
use crate::settings::RenderSettings;
use crate::stroke_utils::{debug_dot_pixels, stroke_width_pixels};
use crate::utils::PatternLayout;

const DEBUG_BOX_COLOR: &str = "#ffffff";
const DEBUG_CENTROID_COLOR: &str = "#ff0000";
const DEBUG_VERTEX_COLOR: &str = "#000000";

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x},{y}"))
        .collect::<Vec<_>>()
        .join(" ")
}

fn render_segment(
    from: (f64, f64),
    to: (f64, f64),
    color: Rgba8,
    stroke_width: f64,
    show_direction: bool,
) -> String {
    let mut out = format!(
        r#"<path d="M {},{} L {},{}" fill="none" stroke="{}" stroke-width="{}" stroke-opacity="{}" stroke-linecap="round"/>"#,
        from.0,
        from.1,
        to.0,
        to.1,
        to_hex(color),
        stroke_width,
        opacity(color)
    );

    if show_direction {
        if let Some(triangle) = direction_triangle(from, to) {
            // write! to a String cannot fail
            let _ = write!(
                out,
                r#"<polygon class="direction" points="{}" fill="{}" fill-opacity="{}"/>"#,
                format_points(&triangle),
                to_hex(color),
                opacity(color)
            );
        }
    }

    out
}

/// Bounding box, centroid and every vertex, drawn under the pattern
fn render_debug_overlay(pattern: &Pattern, layout: &PatternLayout, stroke_width: f64) -> String {
    let bbox = pattern.bounding_box();
    let (min_x, min_y) = layout.to_canvas(bbox.min);
    let (cx, cy) = layout.to_canvas(pattern.centroid());
    let dot = debug_dot_pixels(stroke_width) / 2.0;

    let mut out = format!(
        r#"<g class="debug"><rect x="{}" y="{}" width="{}" height="{}" fill="{}" stroke="none"/><circle class="centroid" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
        min_x,
        min_y,
        layout.to_pixels(pattern.width()),
        layout.to_pixels(pattern.height()),
        DEBUG_BOX_COLOR,
        cx,
        cy,
        dot,
        DEBUG_CENTROID_COLOR
    );
    for vertex in pattern.vertices() {
        let (x, y) = layout.to_canvas(*vertex);
        let _ = write!(
            out,
            r#"<circle class="vertex" cx="{x}" cy="{y}" r="{dot}" fill="{DEBUG_VERTEX_COLOR}"/>"#
        );
    }
    out.push_str("</g>");
    out
}

/// Render a pattern as a standalone SVG document.
///
/// Segments are straight; the wiggly stroke style only exists in the
/// Skia renderer.
pub fn generate_svg(pattern: &Pattern, settings: &RenderSettings) -> Result<String> {
    settings.validate().context("Invalid render settings")?;
    let start = settings.start_color()?;
    let end = settings.end_color()?;

    let layout = PatternLayout::new(pattern, settings.pattern_size);
    let viewbox = layout.viewbox;
    let stroke_width = stroke_width_pixels(settings.stroke_width, layout.scale);
    let count = pattern.segment_count();

    let overlay = if settings.debug_overlay {
        render_debug_overlay(pattern, &layout, stroke_width)
    } else {
        String::new()
    };

    let segments_svg = pattern
        .segments()
        .enumerate()
        .map(|(i, (from, to))| {
            render_segment(
                layout.to_canvas(from),
                layout.to_canvas(to),
                segment_color(start, end, i, count),
                stroke_width,
                settings.direction_indicator,
            )
        })
        .collect::<Vec<_>>()
        .join("\n  ");

    debug!("Generated SVG for {pattern} with {count} segments at scale {}", layout.scale);

    Ok(format!(
        "<svg viewBox=\"{} {} {} {}\" width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n  <desc>{}</desc>\n  {}\n  {}\n</svg>",
        viewbox.min_x,
        viewbox.min_y,
        viewbox.width,
        viewbox.height,
        viewbox.width,
        viewbox.height,
        escape_xml(&pattern.to_string()),
        overlay,
        segments_svg
    ))
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
