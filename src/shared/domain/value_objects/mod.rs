pub mod ids;

pub use ids::{BookId, BookcaseId, ShelfId};
