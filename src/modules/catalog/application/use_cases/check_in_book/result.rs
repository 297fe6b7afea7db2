use crate::modules::catalog::domain::value_objects::AvailabilityStatus;
use crate::shared::domain::value_objects::BookId;

/// Result of a check-in
#[derive(Debug, Clone)]
pub struct CheckInBookResult {
    pub book_id: BookId,
    pub title: String,
    pub availability_status: AvailabilityStatus,
}

impl CheckInBookResult {
    pub fn new(book_id: BookId, title: String, availability_status: AvailabilityStatus) -> Self {
        Self {
            book_id,
            title,
            availability_status,
        }
    }
}
