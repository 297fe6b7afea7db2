pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::service::PlacementService;
pub use domain::{Bookcase, BookcaseRepository, Placement, Shelf, ShelfRepository};
