use async_trait::async_trait;

use crate::modules::catalog::domain::entities::Book;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::shared::domain::value_objects::{BookId, ShelfId};
use crate::shared::errors::AppResult;

/// Port (interface) for the book store - infrastructure provides the implementation
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Persist a new book
    async fn save(&self, book: &Book) -> AppResult<()>;

    /// Persist changes to an existing book
    async fn update(&self, book: &Book) -> AppResult<()>;

    /// Find book by ID
    async fn find_by_id(&self, id: BookId) -> AppResult<Option<Book>>;

    /// Find book by its ISBN
    async fn find_by_isbn(&self, isbn: &Isbn) -> AppResult<Option<Book>>;

    /// Find book by title, case-insensitive exact match
    async fn find_by_title_ignore_case(&self, title: &str) -> AppResult<Option<Book>>;

    /// All books currently placed on the given shelf
    async fn find_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<Vec<Book>>;

    /// Count of books currently placed on the given shelf
    async fn count_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<u64>;

    /// All books in the catalog
    async fn find_all(&self) -> AppResult<Vec<Book>>;

    /// Delete book by ID
    async fn delete(&self, id: BookId) -> AppResult<()>;

    /// Delete every book placed on the given shelf, returning how many were removed
    async fn delete_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<u64>;
}
