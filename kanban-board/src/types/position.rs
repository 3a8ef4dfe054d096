//! Fractional positions for ordering cards within a column and columns on the board.
//!
//! A position is a plain `f64` sort key. New entities are appended at
//! `max + MIN_INDEX`; a moved entity takes a value computed from the positions
//! of the two neighbors it is dropped between, so no sibling is rewritten.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Base increment between appended entities, leaving room to subdivide
pub const MIN_INDEX: f64 = 3000.0;

/// Smallest gap a computed position may leave to either bound before the
/// scope is renumbered
pub const MIN_GAP: f64 = 1e-6;

/// Sort key of a card within its column, or of a column within the board
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Position(f64);

impl Position {
    /// The position reported for an empty scope
    pub const ZERO: Position = Position(0.0);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Position of an entity appended after `max`
    pub fn append_after(max: Position) -> Self {
        Self(max.0 + MIN_INDEX)
    }

    /// Evenly spaced position for the entity at `rank` (0-based) after renumbering
    pub fn slot(rank: usize) -> Self {
        Self((rank as f64 + 1.0) * MIN_INDEX)
    }

    /// Decode a neighbor sent by a caller: zero or NaN means "no neighbor"
    pub fn neighbor(value: f64) -> Option<Self> {
        if value == 0.0 || value.is_nan() {
            None
        } else {
            Some(Self(value))
        }
    }

    /// True when this position, computed for the gap between `prev` and `next`,
    /// no longer leaves usable room on both sides.
    ///
    /// The lower bound of a missing `prev` is zero, the upper bound of a
    /// missing `next` is unbounded.
    pub fn is_exhausted(self, prev: Option<Position>, next: Option<Position>) -> bool {
        if !self.0.is_finite() {
            return true;
        }
        let lower = prev.map_or(0.0, |p| p.0);
        let upper = next.map_or(f64::INFINITY, |n| n.0);
        self.0 - lower < MIN_GAP || upper - self.0 < MIN_GAP
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position for an entity placed between `prev` and `next`
///
/// - both neighbors: midpoint
/// - only `prev` (after the last entity): `prev + prev / 2`
/// - only `next` (before the first entity): `next / 2`
/// - neither (empty scope): [`MIN_INDEX`]
pub fn compute_position(prev: Option<Position>, next: Option<Position>) -> Position {
    match (prev, next) {
        (Some(prev), Some(next)) => Position((prev.0 + next.0) / 2.0),
        (Some(prev), None) => Position(prev.0 + prev.0 / 2.0),
        (None, Some(next)) => Position(next.0 / 2.0),
        (None, None) => Position(MIN_INDEX),
    }
}

/// Serde helper for neighbor fields that may arrive as numbers or strings
///
/// `null`, `""`, `0`, `"0"` and NaN decode to `None`. Infinite values and
/// non-numeric strings are rejected.
///
/// ```ignore
/// #[serde(default, deserialize_with = "kanban_board::types::deserialize_neighbor")]
/// pub prev_card_index: Option<Position>,
/// ```
pub fn deserialize_neighbor<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawNeighbor {
        Number(f64),
        Text(String),
    }

    let value = match Option::<RawNeighbor>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawNeighbor::Number(n)) => n,
        Some(RawNeighbor::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse::<f64>()
                .map_err(|_| D::Error::custom(format!("not a position: {text:?}")))?
        }
    };

    if value.is_infinite() {
        return Err(D::Error::custom("position must be finite"));
    }
    Ok(Position::neighbor(value))
}
