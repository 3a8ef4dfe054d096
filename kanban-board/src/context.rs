//! BoardContext - the tables a command runs against
//!
//! The context holds storage handles and hands out repositories. No business
//! logic lives here; commands do the work.

use crate::repository::{CardRepository, ColumnRepository};
use crate::types::{Card, Column};
use kanban_board_store::{FileTable, MemoryTable, Record, Table};
use std::path::Path;
use std::sync::Arc;

/// Context passed to every command
///
/// Cloning is cheap: clones share the same tables.
#[derive(Clone)]
pub struct BoardContext {
    cards: Arc<dyn Table<Card>>,
    columns: Arc<dyn Table<Column>>,
}

impl BoardContext {
    /// Create a context over the given tables
    pub fn new(cards: Arc<dyn Table<Card>>, columns: Arc<dyn Table<Column>>) -> Self {
        Self { cards, columns }
    }

    /// A context backed by in-process tables, empty on creation
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MemoryTable::<Card>::new()),
            Arc::new(MemoryTable::<Column>::new()),
        )
    }

    /// A context backed by JSON files under `root`, using the default table names
    pub fn open(root: impl AsRef<Path>) -> Self {
        Self::open_with_tables(root, Card::TABLE, Column::TABLE)
    }

    /// A context backed by JSON files under `root/<cards_table>` and `root/<columns_table>`
    pub fn open_with_tables(
        root: impl AsRef<Path>,
        cards_table: &str,
        columns_table: &str,
    ) -> Self {
        let root = root.as_ref();
        tracing::debug!(
            root = %root.display(),
            cards_table,
            columns_table,
            "opening file-backed board"
        );
        Self::new(
            Arc::new(FileTable::<Card>::new(root.join(cards_table))),
            Arc::new(FileTable::<Column>::new(root.join(columns_table))),
        )
    }

    // =========================================================================
    // Table access
    // =========================================================================

    pub fn cards(&self) -> &dyn Table<Card> {
        self.cards.as_ref()
    }

    pub fn columns(&self) -> &dyn Table<Column> {
        self.columns.as_ref()
    }

    pub fn card_repository(&self) -> CardRepository<'_> {
        CardRepository::new(self.cards())
    }

    pub fn column_repository(&self) -> ColumnRepository<'_> {
        ColumnRepository::new(self.columns())
    }
}

impl Default for BoardContext {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl std::fmt::Debug for BoardContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardContext").finish_non_exhaustive()
    }
}
