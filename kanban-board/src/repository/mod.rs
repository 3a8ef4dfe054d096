//! Repositories: the only code that talks to the tables
//!
//! Commands validate input and shape responses; every read and write of a
//! card or column row goes through one of these.

mod card;
mod column;

pub use card::CardRepository;
pub use column::ColumnRepository;
