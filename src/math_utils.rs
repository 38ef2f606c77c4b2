//! Numeric helpers shared by the geometry engine and the renderers

/// True when `a` and `b` differ by strictly less than `tolerance`
pub fn approx_eq<T>(a: T, b: T, tolerance: T) -> bool
where
    T: num_traits::Float,
{
    (a - b).abs() < tolerance
}

/// Calculate distance between two points
pub fn distance<T>(p1: (T, T), p2: (T, T)) -> T
where
    T: num_traits::Float,
{
    let dx = p2.0 - p1.0;
    let dy = p2.1 - p1.1;
    (dx * dx + dy * dy).sqrt()
}

/// Position of item `index` out of `count` along a 0..=1 ramp.
/// A single item sits at 0.
pub fn ramp_position(index: usize, count: usize) -> f64 {
    if count <= 1 {
        0.0
    } else {
        index as f64 / (count - 1) as f64
    }
}
