use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::modules::placement::domain::repositories::ShelfRepository;
use crate::modules::placement::domain::value_objects::Placement;
use crate::shared::{application::use_case::UseCase, errors::AppError, errors::AppResult};

use super::{command::PlaceBookOnShelfCommand, result::PlaceBookOnShelfResult};

/// Use case handler for placing a book on a shelf.
///
/// The capacity check happens against the shelf's hydrated occupancy
/// before either aggregate is written, so a full shelf rejects the
/// placement with its occupancy untouched. The book is persisted first:
/// its `shelf_id` column is the durable placement record, which keeps the
/// write effectively atomic even though two repositories are involved.
pub struct PlaceBookOnShelfHandler {
    book_repository: Arc<dyn BookRepository>,
    shelf_repository: Arc<dyn ShelfRepository>,
}

impl PlaceBookOnShelfHandler {
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        shelf_repository: Arc<dyn ShelfRepository>,
    ) -> Self {
        Self {
            book_repository,
            shelf_repository,
        }
    }
}

#[async_trait]
impl UseCase<PlaceBookOnShelfCommand, PlaceBookOnShelfResult> for PlaceBookOnShelfHandler {
    async fn execute(&self, command: PlaceBookOnShelfCommand) -> AppResult<PlaceBookOnShelfResult> {
        let mut book = self
            .book_repository
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", command.book_id)))?;

        let mut shelf = self
            .shelf_repository
            .find_by_id(command.shelf_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Shelf {} not found", command.shelf_id)))?;

        shelf.add_book(book.id)?;
        book.assign_shelf(shelf.id);

        self.book_repository.update(&book).await?;
        self.shelf_repository.update(&shelf).await?;

        log_info!("Placed '{}' on shelf '{}'", book.title, shelf.label);

        Ok(PlaceBookOnShelfResult::new(
            Placement::new(book.id, shelf.id),
            shelf.label,
        ))
    }
}
