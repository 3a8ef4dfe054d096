//! Card commands

mod add;
mod delete;
mod get;
mod list;
mod max_index;
mod mv;
mod update;

pub use add::AddCard;
pub use delete::DeleteCard;
pub use get::GetCard;
pub use list::{ListCards, ListCardsByColumn, ListSortedCards};
pub use max_index::GetMaxCardIndex;
pub use mv::MoveCard;
pub use update::UpdateCard;
