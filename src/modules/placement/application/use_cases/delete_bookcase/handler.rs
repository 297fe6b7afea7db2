use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::modules::placement::domain::repositories::{BookcaseRepository, ShelfRepository};
use crate::shared::{application::use_case::UseCase, errors::AppError, errors::AppResult};

use super::{command::DeleteBookcaseCommand, result::DeleteBookcaseResult};

/// Use case handler for deleting a bookcase.
///
/// Cascade order is books, then shelves, then the bookcase. Each step
/// only removes rows whose referents are already gone, so a failure
/// partway through never leaves a shelf pointing at a deleted bookcase or
/// a book pointing at a deleted shelf.
pub struct DeleteBookcaseHandler {
    bookcase_repository: Arc<dyn BookcaseRepository>,
    shelf_repository: Arc<dyn ShelfRepository>,
    book_repository: Arc<dyn BookRepository>,
}

impl DeleteBookcaseHandler {
    pub fn new(
        bookcase_repository: Arc<dyn BookcaseRepository>,
        shelf_repository: Arc<dyn ShelfRepository>,
        book_repository: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            bookcase_repository,
            shelf_repository,
            book_repository,
        }
    }
}

#[async_trait]
impl UseCase<DeleteBookcaseCommand, DeleteBookcaseResult> for DeleteBookcaseHandler {
    async fn execute(&self, command: DeleteBookcaseCommand) -> AppResult<DeleteBookcaseResult> {
        let bookcase = self
            .bookcase_repository
            .find_by_id(command.bookcase_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Bookcase {} not found", command.bookcase_id))
            })?;

        let shelves = self.shelf_repository.find_by_bookcase_id(bookcase.id).await?;

        let mut books_deleted = 0u64;
        for shelf in &shelves {
            books_deleted += self.book_repository.delete_by_shelf_id(shelf.id).await?;
        }

        let shelves_deleted = self
            .shelf_repository
            .delete_by_bookcase_id(bookcase.id)
            .await?;

        self.bookcase_repository.delete(bookcase.id).await?;

        log_info!(
            "Deleted bookcase '{}' ({} shelves, {} books)",
            bookcase.location,
            shelves_deleted,
            books_deleted
        );

        Ok(DeleteBookcaseResult::new(
            bookcase.id,
            books_deleted,
            shelves_deleted,
        ))
    }
}
