pub mod sqlite;
mod title;
pub mod traits;

pub use sqlite::SqliteStorage;
pub use title::{Title, TitleClass, TitleSummary};
pub use traits::Storage;
