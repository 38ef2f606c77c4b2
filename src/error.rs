use thiserror::Error;

/// Everything that can go wrong while turning notation into geometry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid heading {0:?}, expected one of EAST, NORTH_EAST, NORTH_WEST, WEST, SOUTH_WEST, SOUTH_EAST")]
    InvalidHeading(String),

    #[error("invalid turn symbol {symbol:?} at index {index}, expected one of w, q, a, s, d, e")]
    InvalidTurnSymbol { symbol: char, index: usize },

    #[error("malformed pattern notation {0:?}, expected \"(HEADING TURNS)\"")]
    MalformedNotation(String),

    #[error("cannot summarize geometry of an empty vertex set")]
    EmptyGeometry,
}

/// Invalid values in [`crate::settings::RenderSettings`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("invalid color {value:?} for {field}: {reason}")]
    InvalidColor {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("pattern size {0} must be between 10 and 500 in steps of 10")]
    InvalidPatternSize(u32),

    #[error("{field} must be a finite, non-negative number, got {value}")]
    NegativeValue { field: &'static str, value: f64 },
}
