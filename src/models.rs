use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PatternError;

/// A vertex of a pattern, in pattern units (one unit per segment).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Step one unit from this point along `angle` (radians).
    pub fn step(self, angle: f64) -> Self {
        Self::new(self.x + angle.cos(), self.y + angle.sin())
    }

    pub fn as_tuple(self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned box spanning a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Starting orientation of a pattern's first segment.
///
/// Angles grow counter-clockwise here; the integrator negates them so the
/// drawing comes out clockwise-positive, which is what rendered patterns
/// are expected to look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Heading {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl Heading {
    pub const ALL: [Heading; 6] = [
        Heading::East,
        Heading::NorthEast,
        Heading::NorthWest,
        Heading::West,
        Heading::SouthWest,
        Heading::SouthEast,
    ];

    pub fn degrees(self) -> f64 {
        match self {
            Heading::East => 0.0,
            Heading::NorthEast => 60.0,
            Heading::NorthWest => 120.0,
            Heading::West => 180.0,
            Heading::SouthWest => 240.0,
            Heading::SouthEast => 300.0,
        }
    }

    pub fn radians(self) -> f64 {
        self.degrees().to_radians()
    }

    /// Name used in the notation, e.g. `NORTH_EAST`
    pub fn name(self) -> &'static str {
        match self {
            Heading::East => "EAST",
            Heading::NorthEast => "NORTH_EAST",
            Heading::NorthWest => "NORTH_WEST",
            Heading::West => "WEST",
            Heading::SouthWest => "SOUTH_WEST",
            Heading::SouthEast => "SOUTH_EAST",
        }
    }

    /// Match a heading token. Case-insensitive.
    pub fn from_name(token: &str) -> Result<Self, PatternError> {
        match token.to_uppercase().as_str() {
            "EAST" => Ok(Heading::East),
            "NORTH_EAST" => Ok(Heading::NorthEast),
            "NORTH_WEST" => Ok(Heading::NorthWest),
            "WEST" => Ok(Heading::West),
            "SOUTH_WEST" => Ok(Heading::SouthWest),
            "SOUTH_EAST" => Ok(Heading::SouthEast),
            _ => Err(PatternError::InvalidHeading(token.to_string())),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A turn relative to the current drawing direction, one notation symbol each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// 0°, keep going straight
    W,
    /// 60°
    Q,
    /// 120°
    A,
    /// 180°, double back
    S,
    /// 240°
    D,
    /// 300°
    E,
}

impl Turn {
    pub const ALL: [Turn; 6] = [Turn::W, Turn::Q, Turn::A, Turn::S, Turn::D, Turn::E];

    pub fn degrees(self) -> f64 {
        match self {
            Turn::W => 0.0,
            Turn::Q => 60.0,
            Turn::A => 120.0,
            Turn::S => 180.0,
            Turn::D => 240.0,
            Turn::E => 300.0,
        }
    }

    pub fn radians(self) -> f64 {
        self.degrees().to_radians()
    }

    /// Lowercase notation symbol
    pub fn symbol(self) -> char {
        match self {
            Turn::W => 'w',
            Turn::Q => 'q',
            Turn::A => 'a',
            Turn::S => 's',
            Turn::D => 'd',
            Turn::E => 'e',
        }
    }

    /// Match one notation character. `index` is only used for the error.
    pub fn from_symbol(symbol: char, index: usize) -> Result<Self, PatternError> {
        match symbol.to_ascii_uppercase() {
            'W' => Ok(Turn::W),
            'Q' => Ok(Turn::Q),
            'A' => Ok(Turn::A),
            'S' => Ok(Turn::S),
            'D' => Ok(Turn::D),
            'E' => Ok(Turn::E),
            _ => Err(PatternError::InvalidTurnSymbol { symbol, index }),
        }
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Output area of a renderer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}
