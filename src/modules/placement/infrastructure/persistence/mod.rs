pub mod bookcase_repository_impl;
pub mod shelf_repository_impl;

pub use bookcase_repository_impl::BookcaseRepositoryImpl;
pub use shelf_repository_impl::ShelfRepositoryImpl;
