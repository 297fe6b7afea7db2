use crate::shared::domain::value_objects::{BookcaseId, ShelfId};

/// Result of creating a bookcase
#[derive(Debug, Clone)]
pub struct CreateBookcaseResult {
    pub bookcase_id: BookcaseId,
    pub location: String,
    pub shelf_ids: Vec<ShelfId>,
}

impl CreateBookcaseResult {
    pub fn new(bookcase_id: BookcaseId, location: String, shelf_ids: Vec<ShelfId>) -> Self {
        Self {
            bookcase_id,
            location,
            shelf_ids,
        }
    }
}
