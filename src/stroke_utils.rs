/// Thinnest stroke that still shows up once rasterized
pub const MIN_STROKE_PIXELS: f64 = 1.0;

/// Convert a stroke width in pattern units to pixels.
/// Zero stays zero so a stroke can be switched off entirely.
pub fn stroke_width_pixels(width_units: f64, scale: f64) -> f64 {
    if width_units <= 0.0 {
        0.0
    } else {
        (width_units * scale).max(MIN_STROKE_PIXELS)
    }
}

/// Diameter of the vertex dots in the debug overlay
pub fn debug_dot_pixels(stroke_pixels: f64) -> f64 {
    (stroke_pixels * 1.5).max(2.0 * MIN_STROKE_PIXELS)
}
