//! Color parsing and gradient utilities

use palette::{LinSrgba, Mix, Srgba};

pub type Rgba8 = (u8, u8, u8, u8);

/// Parse a hex color string into RGBA components
/// Accepts:
/// - "transparent" => (0, 0, 0, 0)
/// - #RRGGBB or RRGGBB => (r, g, b, 255)
/// - #RRGGBBAA or RRGGBBAA => (r, g, b, a)
///
/// Used as a clap value parser, hence the `String` error.
pub fn parse_color_result(color_str: &str) -> Result<Rgba8, String> {
    if color_str.eq_ignore_ascii_case("transparent") {
        return Ok((0, 0, 0, 0));
    }

    let trimmed = color_str.trim();
    let hex = if let Some(rest) = trimmed.strip_prefix('#') {
        rest
    } else {
        trimmed
    };

    if !hex.is_ascii() {
        return Err("Color must only contain hex digits".to_string());
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16)
                .map_err(|_| "Invalid hex digit in R component")?;
            let g = u8::from_str_radix(&hex[2..4], 16)
                .map_err(|_| "Invalid hex digit in G component")?;
            let b = u8::from_str_radix(&hex[4..6], 16)
                .map_err(|_| "Invalid hex digit in B component")?;
            Ok((r, g, b, 255))
        }
        8 => {
            let r = u8::from_str_radix(&hex[0..2], 16)
                .map_err(|_| "Invalid hex digit in R component")?;
            let g = u8::from_str_radix(&hex[2..4], 16)
                .map_err(|_| "Invalid hex digit in G component")?;
            let b = u8::from_str_radix(&hex[4..6], 16)
                .map_err(|_| "Invalid hex digit in B component")?;
            let a = u8::from_str_radix(&hex[6..8], 16)
                .map_err(|_| "Invalid hex digit in A component")?;
            Ok((r, g, b, a))
        }
        _ => Err(format!(
            "Expected 6 or 8 hex digits (RRGGBB or RRGGBBAA), got {}",
            hex.len()
        )),
    }
}

/// Blend from `start` to `end`, `t` in 0..=1. Mixing happens in linear
/// light so the midpoint of a dark and a bright color doesn't look muddy.
pub fn mix_colors(start: Rgba8, end: Rgba8, t: f64) -> Rgba8 {
    let t = t.clamp(0.0, 1.0) as f32;
    let start: LinSrgba = Srgba::from_components(start).into_format::<f32, f32>().into_linear();
    let end: LinSrgba = Srgba::from_components(end).into_format::<f32, f32>().into_linear();

    let mixed: Srgba<u8> = Srgba::<f32>::from_linear(start.mix(end, t)).into_format();
    mixed.into_components()
}

/// Color of segment `index` out of `count` along the start→end gradient
pub fn segment_color(start: Rgba8, end: Rgba8, index: usize, count: usize) -> Rgba8 {
    mix_colors(start, end, crate::math_utils::ramp_position(index, count))
}

/// `#rrggbb` for SVG attributes; alpha goes in a separate opacity attribute
pub fn to_hex(color: Rgba8) -> String {
    format!("#{:02x}{:02x}{:02x}", color.0, color.1, color.2)
}

/// Alpha as a 0..=1 opacity
pub fn opacity(color: Rgba8) -> f64 {
    color.3 as f64 / 255.0
}
