use crate::shared::domain::value_objects::BookId;

/// Result of adding a book to the catalog
#[derive(Debug, Clone)]
pub struct AddBookResult {
    pub book_id: BookId,
    pub title: String,
    /// false when the catalog record was created without external metadata
    pub metadata_resolved: bool,
}

impl AddBookResult {
    pub fn new(book_id: BookId, title: String, metadata_resolved: bool) -> Self {
        Self {
            book_id,
            title,
            metadata_resolved,
        }
    }
}
