use std::sync::Arc;

use crate::modules::catalog::domain::entities::Book;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::modules::placement::application::use_cases::{
    CreateBookcaseCommand, CreateBookcaseHandler, CreateBookcaseResult, DeleteBookcaseCommand,
    DeleteBookcaseHandler, DeleteBookcaseResult, PlaceBookOnShelfCommand, PlaceBookOnShelfHandler,
    PlaceBookOnShelfResult,
};
use crate::modules::placement::domain::entities::{Bookcase, Shelf};
use crate::modules::placement::domain::repositories::{BookcaseRepository, ShelfRepository};
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::value_objects::{BookId, BookcaseId, ShelfId};
use crate::shared::errors::AppResult;

/// Application facade over the placement use cases and queries.
pub struct PlacementService {
    bookcase_repo: Arc<dyn BookcaseRepository>,
    shelf_repo: Arc<dyn ShelfRepository>,
    book_repo: Arc<dyn BookRepository>,
    create_bookcase: CreateBookcaseHandler,
    place_book: PlaceBookOnShelfHandler,
    delete_bookcase: DeleteBookcaseHandler,
}

impl PlacementService {
    pub fn new(
        bookcase_repo: Arc<dyn BookcaseRepository>,
        shelf_repo: Arc<dyn ShelfRepository>,
        book_repo: Arc<dyn BookRepository>,
    ) -> Self {
        Self {
            create_bookcase: CreateBookcaseHandler::new(
                bookcase_repo.clone(),
                shelf_repo.clone(),
            ),
            place_book: PlaceBookOnShelfHandler::new(book_repo.clone(), shelf_repo.clone()),
            delete_bookcase: DeleteBookcaseHandler::new(
                bookcase_repo.clone(),
                shelf_repo.clone(),
                book_repo.clone(),
            ),
            bookcase_repo,
            shelf_repo,
            book_repo,
        }
    }

    pub async fn create_bookcase(
        &self,
        command: CreateBookcaseCommand,
    ) -> AppResult<CreateBookcaseResult> {
        self.create_bookcase.execute(command).await
    }

    pub async fn place_book_on_shelf(
        &self,
        book_id: BookId,
        shelf_id: ShelfId,
    ) -> AppResult<PlaceBookOnShelfResult> {
        self.place_book
            .execute(PlaceBookOnShelfCommand::new(book_id, shelf_id))
            .await
    }

    pub async fn delete_bookcase(
        &self,
        bookcase_id: BookcaseId,
    ) -> AppResult<DeleteBookcaseResult> {
        self.delete_bookcase
            .execute(DeleteBookcaseCommand::new(bookcase_id))
            .await
    }

    pub async fn get_bookcase(&self, id: BookcaseId) -> AppResult<Option<Bookcase>> {
        self.bookcase_repo.find_by_id(id).await
    }

    pub async fn get_all_bookcases(&self) -> AppResult<Vec<Bookcase>> {
        self.bookcase_repo.find_all().await
    }

    pub async fn get_shelf(&self, id: ShelfId) -> AppResult<Option<Shelf>> {
        self.shelf_repo.find_by_id(id).await
    }

    pub async fn get_shelves_in_bookcase(&self, bookcase_id: BookcaseId) -> AppResult<Vec<Shelf>> {
        self.shelf_repo.find_by_bookcase_id(bookcase_id).await
    }

    pub async fn get_books_on_shelf(&self, shelf_id: ShelfId) -> AppResult<Vec<Book>> {
        self.book_repo.find_by_shelf_id(shelf_id).await
    }
}
