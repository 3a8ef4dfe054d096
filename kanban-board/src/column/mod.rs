//! Column commands

mod add;
mod delete;
mod get;
mod list;
mod max_index;
mod mv;
mod update;

pub use add::AddColumn;
pub use delete::DeleteColumn;
pub use get::GetColumn;
pub use list::{ListColumns, ListSortedColumns};
pub use max_index::GetMaxColumnIndex;
pub use mv::MoveColumn;
pub use update::UpdateColumn;
