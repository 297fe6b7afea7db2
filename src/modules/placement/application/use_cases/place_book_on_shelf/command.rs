use crate::shared::domain::value_objects::{BookId, ShelfId};

/// Command for placing a book on a shelf
#[derive(Debug, Clone)]
pub struct PlaceBookOnShelfCommand {
    pub book_id: BookId,
    pub shelf_id: ShelfId,
}

impl PlaceBookOnShelfCommand {
    pub fn new(book_id: BookId, shelf_id: ShelfId) -> Self {
        Self { book_id, shelf_id }
    }
}
