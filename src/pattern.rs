use log::debug;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;
use crate::geometry::{integrate, reduce, summarize, DEFAULT_TOLERANCE};
use crate::models::{BoundingBox, Heading, Point, Turn};
use crate::parser::{parse, PatternSource};

/// A fully computed hex pattern.
///
/// All geometry is derived once in [`Pattern::new`]; there is no way to
/// change a pattern afterwards, so one value can back any number of
/// renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    heading: Heading,
    turns: Vec<Turn>,
    vertices: Vec<Point>,
    unique_vertices: Vec<Point>,
    centroid: Point,
    bounding_box: BoundingBox,
    width: f64,
    height: f64,
}

impl Pattern {
    pub fn new(heading: Heading, turns: Vec<Turn>) -> Result<Self, PatternError> {
        let vertices = integrate(heading, &turns);
        let unique_vertices = reduce(&vertices, DEFAULT_TOLERANCE);
        let summary = summarize(&unique_vertices)?;

        debug!(
            "Built {heading} pattern: {} turns, {} vertices, {} unique",
            turns.len(),
            vertices.len(),
            unique_vertices.len()
        );

        Ok(Self {
            heading,
            turns,
            vertices,
            unique_vertices,
            centroid: summary.centroid,
            bounding_box: summary.bounding_box,
            width: summary.width,
            height: summary.height,
        })
    }

    /// Parse notation and build the pattern in one go
    pub fn parse(notation: &str) -> Result<Self, PatternError> {
        let PatternSource { heading, turns } = parse(notation)?;
        Self::new(heading, turns)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Every vertex in drawing order, repeats included
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn unique_vertices(&self) -> &[Point] {
        &self.unique_vertices
    }

    /// Mean of the unique vertices
    pub fn centroid(&self) -> Point {
        self.centroid
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bounding_box
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Consecutive vertex pairs, one per drawn segment
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn segment_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }
}

impl FromStr for Pattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical notation: uppercase heading, lowercase turns
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} ", self.heading)?;
        for turn in &self.turns {
            write!(f, "{turn}")?;
        }
        write!(f, ")")
    }
}
