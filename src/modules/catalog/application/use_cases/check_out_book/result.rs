use crate::modules::catalog::domain::value_objects::AvailabilityStatus;
use crate::shared::domain::value_objects::BookId;

/// Result of a successful check-out
#[derive(Debug, Clone)]
pub struct CheckOutBookResult {
    pub book_id: BookId,
    pub title: String,
    pub availability_status: AvailabilityStatus,
}

impl CheckOutBookResult {
    pub fn new(book_id: BookId, title: String, availability_status: AvailabilityStatus) -> Self {
        Self {
            book_id,
            title,
            availability_status,
        }
    }
}
