use crate::shared::domain::value_objects::BookcaseId;

/// Command for deleting a bookcase and everything it holds
#[derive(Debug, Clone)]
pub struct DeleteBookcaseCommand {
    pub bookcase_id: BookcaseId,
}

impl DeleteBookcaseCommand {
    pub fn new(bookcase_id: BookcaseId) -> Self {
        Self { bookcase_id }
    }
}
