use serde::Serialize;

use crate::error::PatternError;
use crate::math_utils::approx_eq;
use crate::models::{BoundingBox, Heading, Point, Turn};

/// Vertices closer than this on both axes are treated as the same vertex
pub const DEFAULT_TOLERANCE: f64 = 0.001;

/// Walk `turns` from the origin, one unit per step.
///
/// Angles are negated before use: patterns turn clockwise for positive
/// angles. The result always holds `turns.len() + 2` points, the origin
/// first. Paths that cross or retrace themselves are kept as they are.
pub fn integrate(heading: Heading, turns: &[Turn]) -> Vec<Point> {
    let mut angle = -heading.radians();
    let mut current = Point::ORIGIN.step(angle);

    let mut vertices = Vec::with_capacity(turns.len() + 2);
    vertices.push(Point::ORIGIN);
    vertices.push(current);

    for turn in turns {
        angle += -turn.radians();
        current = current.step(angle);
        vertices.push(current);
    }

    vertices
}

/// Drop vertices that repeat an earlier one, keeping first occurrences in order.
///
/// Two vertices match when they are within `tolerance` on x *and* on y;
/// this is a per-axis box test, not a radius.
pub fn reduce(vertices: &[Point], tolerance: f64) -> Vec<Point> {
    let mut unique: Vec<Point> = Vec::new();

    for vertex in vertices {
        let seen = unique.iter().any(|existing| {
            approx_eq(vertex.x, existing.x, tolerance) && approx_eq(vertex.y, existing.y, tolerance)
        });
        if !seen {
            unique.push(*vertex);
        }
    }

    unique
}

/// Centroid and extent of a vertex set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeometrySummary {
    pub centroid: Point,
    pub bounding_box: BoundingBox,
    pub width: f64,
    pub height: f64,
}

/// Mean point and per-axis bounds of `vertices`
pub fn summarize(vertices: &[Point]) -> Result<GeometrySummary, PatternError> {
    if vertices.is_empty() {
        return Err(PatternError::EmptyGeometry);
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for point in vertices {
        sum_x += point.x;
        sum_y += point.y;
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    let count = vertices.len() as f64;
    let bounding_box = BoundingBox {
        min: Point::new(min_x, min_y),
        max: Point::new(max_x, max_y),
    };

    Ok(GeometrySummary {
        centroid: Point::new(sum_x / count, sum_y / count),
        bounding_box,
        width: bounding_box.width(),
        height: bounding_box.height(),
    })
}
