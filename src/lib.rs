pub mod cli;
pub mod modules;
pub mod schema;
pub mod shared;

// Re-exports for easy external access
pub use modules::catalog::CatalogService;
pub use modules::metadata::OpenLibraryClient;
pub use modules::placement::PlacementService;
pub use shared::errors::{AppError, AppResult};
