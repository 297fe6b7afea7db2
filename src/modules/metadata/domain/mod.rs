pub mod book_metadata;

pub use book_metadata::BookMetadata;
