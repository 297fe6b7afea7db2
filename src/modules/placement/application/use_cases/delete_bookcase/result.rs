use crate::shared::domain::value_objects::BookcaseId;

/// Result of the cascading bookcase deletion
#[derive(Debug, Clone)]
pub struct DeleteBookcaseResult {
    pub bookcase_id: BookcaseId,
    pub books_deleted: u64,
    pub shelves_deleted: u64,
}

impl DeleteBookcaseResult {
    pub fn new(bookcase_id: BookcaseId, books_deleted: u64, shelves_deleted: u64) -> Self {
        Self {
            bookcase_id,
            books_deleted,
            shelves_deleted,
        }
    }
}
