pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use domain::BookMetadata;
pub use infrastructure::external::openlibrary::OpenLibraryClient;
