//! Direction indicator geometry, shared by the SVG and Skia renderers

use crate::math_utils::distance;

/// Half-angle of the indicator's tip, in degrees
pub const INDICATOR_ANGLE: f64 = 25.0;
/// Indicator length as a fraction of its segment
pub const INDICATOR_LENGTH: f64 = 0.3;

/// Rotate a point around a center point by a given angle (in radians)
pub fn rotate_point<T>(px: T, py: T, cx: T, cy: T, angle_rad: T) -> (T, T)
where
    T: num_traits::Float,
{
    let dx = px - cx;
    let dy = py - cy;
    let ca = angle_rad.cos();
    let sa = angle_rad.sin();
    (cx + dx * ca - dy * sa, cy + dx * sa + dy * ca)
}

/// Triangle centered on the segment `tail -> tip`, pointing at `tip`.
/// Returns `[point, side1, side2]`, or `None` for a zero-length segment.
pub fn direction_triangle<T>(tail: (T, T), tip: (T, T)) -> Option<[(T, T); 3]>
where
    T: num_traits::Float,
{
    let dx = tip.0 - tail.0;
    let dy = tip.1 - tail.1;
    let length = distance(tail, tip);
    if length == T::zero() {
        return None;
    }

    let two = T::one() + T::one();
    let size = length * T::from(INDICATOR_LENGTH)?;
    let nx = dx / length;
    let ny = dy / length;

    let mid = (tail.0 + dx / two, tail.1 + dy / two);
    let point = (mid.0 + nx * size / two, mid.1 + ny * size / two);
    let base = (mid.0 - nx * size / two, mid.1 - ny * size / two);

    let angle = T::from(INDICATOR_ANGLE)?.to_radians();
    let side1 = rotate_point(base.0, base.1, point.0, point.1, angle);
    let side2 = rotate_point(base.0, base.1, point.0, point.1, -angle);

    Some([point, side1, side2])
}
