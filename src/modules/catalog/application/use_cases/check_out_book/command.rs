use crate::shared::domain::value_objects::BookId;

/// Command for checking a book out of circulation
#[derive(Debug, Clone)]
pub struct CheckOutBookCommand {
    pub book_id: BookId,
}

impl CheckOutBookCommand {
    pub fn new(book_id: BookId) -> Self {
        Self { book_id }
    }
}
