use log::warn;

use crate::error::PatternError;
use crate::models::{Heading, Turn};

/// The raw ingredients of a pattern, as read from its notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSource {
    pub heading: Heading,
    pub turns: Vec<Turn>,
}

/// Parse `"(HEADING TURNS)"` notation, e.g. `(EAST wwaqqqqqeaw)`.
///
/// The first and last characters are taken to be the delimiters and are
/// dropped without being inspected. The turn string may be empty
/// (`"(EAST )"`), but the separator between the two tokens must be there.
/// Tokens after the turn string are ignored.
pub fn parse(notation: &str) -> Result<PatternSource, PatternError> {
    let malformed = || PatternError::MalformedNotation(notation.to_string());

    let trimmed = notation.trim();
    let mut chars = trimmed.chars();
    if chars.next().is_none() || chars.next_back().is_none() {
        return Err(malformed());
    }
    let inner = chars.as_str().trim_start();

    let (heading_token, rest) = inner.split_once(char::is_whitespace).ok_or_else(malformed)?;
    if heading_token.is_empty() {
        return Err(malformed());
    }

    let mut tokens = rest.split_whitespace();
    let turns_token = tokens.next().unwrap_or("");
    let extra: Vec<&str> = tokens.collect();
    if !extra.is_empty() {
        warn!("Ignoring trailing tokens {extra:?} in pattern {notation:?}");
    }

    let heading = Heading::from_name(heading_token)?;
    let turns = turns_token
        .chars()
        .enumerate()
        .map(|(index, symbol)| Turn::from_symbol(symbol, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PatternSource { heading, turns })
}
