pub mod book_repository_impl;

pub use book_repository_impl::BookRepositoryImpl;
