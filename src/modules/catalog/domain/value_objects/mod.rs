pub mod author;
pub mod availability_status;
pub mod book_title;
pub mod isbn;

pub use author::AuthorRef;
pub use availability_status::AvailabilityStatus;
pub use book_title::BookTitle;
pub use isbn::Isbn;
