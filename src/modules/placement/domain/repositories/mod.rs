pub mod bookcase_repository;
pub mod shelf_repository;

pub use bookcase_repository::BookcaseRepository;
pub use shelf_repository::ShelfRepository;
