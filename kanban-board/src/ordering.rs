//! Placement of positioned records within a scope
//!
//! Shared by the card and column repositories. A scope is one index
//! partition: a column's cards, or the board's columns.

use crate::error::{KanbanError, Result};
use crate::types::{compute_position, Position, Positioned};
use kanban_board_store::{Item, Result as StoreResult, SortOrder, Table};
use serde_json::json;

/// Highest position in a scope, or zero when the scope is empty
pub(crate) async fn max_position<R: Positioned>(
    table: &dyn Table<R>,
    scope: &str,
) -> StoreResult<Position> {
    let top = table
        .query_index(scope, SortOrder::Descending, Some(1))
        .await?;
    Ok(top.first().map(|r| r.position()).unwrap_or(Position::ZERO))
}

/// Reject neighbors that are negative or out of order
///
/// Every stored position is positive, so a negative neighbor cannot name a
/// sibling. Equal neighbors are accepted: concurrent moves can leave two
/// siblings on the same position, and placing between them renumbers the
/// scope.
pub(crate) fn check_neighbors(
    prev_field: &str,
    next_field: &str,
    prev: Option<Position>,
    next: Option<Position>,
) -> Result<()> {
    for (field, neighbor) in [(prev_field, prev), (next_field, next)] {
        if let Some(position) = neighbor.filter(|p| p.value() < 0.0) {
            return Err(KanbanError::invalid_value(
                field,
                format!("{position} is not a valid position"),
            ));
        }
    }
    if let (Some(prev), Some(next)) = (prev, next) {
        if prev > next {
            return Err(KanbanError::invalid_value(
                prev_field,
                format!("{prev} is after the next neighbor {next}"),
            ));
        }
    }
    Ok(())
}

/// Position for `moving` dropped between `prev` and `next` in `scope`
///
/// When the computed position leaves no usable gap, every other record in
/// the scope is renumbered to evenly spaced slots first, the neighbors are
/// translated into the new numbering, and the position is computed again.
pub(crate) async fn place<R: Positioned>(
    table: &dyn Table<R>,
    scope: &str,
    moving: &str,
    prev: Option<Position>,
    next: Option<Position>,
) -> StoreResult<Position> {
    let position = compute_position(prev, next);
    if !position.is_exhausted(prev, next) {
        return Ok(position);
    }

    let siblings: Vec<R> = table
        .query_index(scope, SortOrder::Ascending, None)
        .await?
        .into_iter()
        .filter(|r| r.key() != moving)
        .collect();

    tracing::warn!(
        table = R::TABLE,
        scope,
        %position,
        siblings = siblings.len(),
        "position space exhausted, renumbering scope"
    );

    let (prev, next) = renumbered_neighbors(&siblings, prev, next);
    renumber(table, &siblings).await?;

    Ok(compute_position(prev, next))
}

/// Attribute map setting a record's position
pub(crate) fn position_fields<R: Positioned>(position: Position) -> Item {
    let mut fields = Item::new();
    fields.insert(R::POSITION_FIELD.to_string(), json!(position.value()));
    fields
}

/// Rewrite `siblings` (ascending) to `Position::slot(rank)`
async fn renumber<R: Positioned>(table: &dyn Table<R>, siblings: &[R]) -> StoreResult<()> {
    for (rank, sibling) in siblings.iter().enumerate() {
        let slot = Position::slot(rank);
        if sibling.position() != slot {
            table
                .update_fields(sibling.key(), position_fields::<R>(slot))
                .await?;
        }
    }
    Ok(())
}

/// Translate neighbor positions into the slots `renumber` assigns
///
/// The mover is inserted right after the last sibling at or below `prev`,
/// or before every sibling when `prev` is below them all. Without `prev` it
/// goes before the first sibling at or above `next`. The result is always a
/// pair of adjacent slots, so the recomputed position falls inside a gap.
fn renumbered_neighbors<R: Positioned>(
    siblings: &[R],
    prev: Option<Position>,
    next: Option<Position>,
) -> (Option<Position>, Option<Position>) {
    let at = match (prev, next) {
        (Some(p), _) => siblings
            .iter()
            .rposition(|s| s.position() <= p)
            .map_or(0, |rank| rank + 1),
        (None, Some(n)) => siblings
            .iter()
            .position(|s| s.position() >= n)
            .unwrap_or(siblings.len()),
        (None, None) => siblings.len(),
    };

    let prev = at.checked_sub(1).map(Position::slot);
    let next = (at < siblings.len()).then(|| Position::slot(at));
    (prev, next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Column, ColumnId};

    fn columns(positions: &[f64]) -> Vec<Column> {
        positions
            .iter()
            .enumerate()
            .map(|(i, &p)| Column {
                column_id: ColumnId::from_string(format!("c{i}")),
                column_index: Position::new(p),
                column_title: format!("Column {i}"),
            })
            .collect()
    }

    fn p(value: f64) -> Option<Position> {
        Some(Position::new(value))
    }

    #[test]
    fn test_check_neighbors() {
        assert!(check_neighbors("prev", "next", p(1.0), p(2.0)).is_ok());
        assert!(check_neighbors("prev", "next", p(2.0), p(2.0)).is_ok());
        assert!(check_neighbors("prev", "next", None, p(2.0)).is_ok());
        assert!(check_neighbors("prev", "next", p(1e-7), None).is_ok());

        let err = check_neighbors("prevColumnIndex", "nextColumnIndex", p(3.0), p(2.0)).unwrap_err();
        assert!(matches!(err, KanbanError::InvalidValue { ref field, .. } if field == "prevColumnIndex"));
    }

    #[test]
    fn test_check_neighbors_rejects_negative() {
        let err = check_neighbors("prevCardIndex", "nextCardIndex", p(-100.0), None).unwrap_err();
        assert!(matches!(err, KanbanError::InvalidValue { ref field, .. } if field == "prevCardIndex"));

        let err = check_neighbors("prevCardIndex", "nextCardIndex", None, p(-1.0)).unwrap_err();
        assert!(matches!(err, KanbanError::InvalidValue { ref field, .. } if field == "nextCardIndex"));
    }

    #[test]
    fn test_renumbered_neighbors_adjacent_pair() {
        let siblings = columns(&[1e-7, 2e-7, 3e-7]);
        let (prev, next) = renumbered_neighbors(&siblings, p(1e-7), p(2e-7));
        assert_eq!(prev, Some(Position::slot(0)));
        assert_eq!(next, Some(Position::slot(1)));
    }

    #[test]
    fn test_renumbered_neighbors_prepend() {
        let siblings = columns(&[1e-7, 2e-7]);
        let (prev, next) = renumbered_neighbors(&siblings, None, p(1e-7));
        assert_eq!(prev, None);
        assert_eq!(next, Some(Position::slot(0)));
    }

    #[test]
    fn test_renumbered_neighbors_tie_places_after_both() {
        let siblings = columns(&[3000.0, 4500.0, 4500.0]);
        let (prev, next) = renumbered_neighbors(&siblings, p(4500.0), p(4500.0));
        assert_eq!(prev, Some(Position::slot(2)));
        assert_eq!(next, None);
    }

    #[test]
    fn test_renumbered_neighbors_stale_prev() {
        let siblings = columns(&[3000.0, 6000.0]);
        let (prev, next) = renumbered_neighbors(&siblings, p(10.0), p(3000.0));
        assert_eq!(prev, None);
        assert_eq!(next, Some(Position::slot(0)));
    }

    #[test]
    fn test_renumbered_neighbors_prev_below_every_sibling() {
        let siblings = columns(&[3000.0, 6000.0]);
        let (prev, next) = renumbered_neighbors(&siblings, p(1e-7), None);
        assert_eq!(prev, None);
        assert_eq!(next, Some(Position::slot(0)));
        assert_eq!(compute_position(prev, next), Position::new(1500.0));
    }

    #[test]
    fn test_renumbered_neighbors_skips_stale_siblings() {
        // Siblings at 4000 and 5000 sit between the caller's neighbors
        let siblings = columns(&[3000.0, 4000.0, 5000.0, 6000.0]);
        let (prev, next) = renumbered_neighbors(&siblings, p(3000.0), p(6000.0));
        assert_eq!(prev, Some(Position::slot(0)));
        assert_eq!(next, Some(Position::slot(1)));
    }

    #[test]
    fn test_renumbered_neighbors_next_above_every_sibling() {
        let siblings = columns(&[3000.0, 6000.0]);
        let (prev, next) = renumbered_neighbors(&siblings, None, p(9000.0));
        assert_eq!(prev, Some(Position::slot(1)));
        assert_eq!(next, None);
    }

    #[test]
    fn test_position_fields() {
        let fields = position_fields::<Column>(Position::new(4500.0));
        assert_eq!(fields["columnIndex"], 4500.0);
    }
}
