use serde::{Deserialize, Serialize};

use crate::shared::domain::value_objects::{BookId, ShelfId};

/// The outcome of placing a book on a shelf.
///
/// Ephemeral value, not persisted as its own entity: the durable record
/// is the book's `shelf_id` back-reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    pub book_id: BookId,
    pub shelf_id: ShelfId,
}

impl Placement {
    pub fn new(book_id: BookId, shelf_id: ShelfId) -> Self {
        Self { book_id, shelf_id }
    }
}
