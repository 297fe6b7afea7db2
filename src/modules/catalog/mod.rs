pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::CatalogService;
pub use domain::{Book, BookRepository};

// Re-export common value objects for shorter imports
pub use domain::value_objects::{AuthorRef, AvailabilityStatus, BookTitle, Isbn};
