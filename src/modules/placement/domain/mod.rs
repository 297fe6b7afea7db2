pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{Bookcase, Shelf};
pub use repositories::{BookcaseRepository, ShelfRepository};
pub use value_objects::Placement;
