//! Core types for the kanban engine

mod card;
mod column;
mod ids;
mod position;

use kanban_board_store::Record;

// Re-export all types
pub use card::{Card, CardChanges};
pub use column::{Column, BOARD_SCOPE};
pub use ids::{CardId, ColumnId};
pub use position::{compute_position, deserialize_neighbor, Position, MIN_GAP, MIN_INDEX};

/// A record ordered by a stored position attribute
pub trait Positioned: Record {
    /// Attribute name holding the position
    const POSITION_FIELD: &'static str;

    fn position(&self) -> Position;
}
