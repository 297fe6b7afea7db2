pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::Book;
pub use repositories::BookRepository;
pub use value_objects::{AuthorRef, AvailabilityStatus, BookTitle, Isbn};
