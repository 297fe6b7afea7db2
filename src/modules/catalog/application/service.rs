use std::sync::Arc;

use crate::modules::catalog::application::ports::MetadataProvider;
use crate::modules::catalog::application::use_cases::{
    AddBookCommand, AddBookHandler, AddBookResult, CheckInBookCommand, CheckInBookHandler,
    CheckInBookResult, CheckOutBookCommand, CheckOutBookHandler, CheckOutBookResult,
};
use crate::modules::catalog::domain::entities::Book;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::shared::application::use_case::UseCase;
use crate::shared::domain::value_objects::BookId;
use crate::shared::errors::AppResult;

/// Application facade over the catalog use cases.
pub struct CatalogService {
    book_repo: Arc<dyn BookRepository>,
    add_book: AddBookHandler,
    check_out: CheckOutBookHandler,
    check_in: CheckInBookHandler,
}

impl CatalogService {
    pub fn new(
        book_repo: Arc<dyn BookRepository>,
        metadata_provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            add_book: AddBookHandler::new(book_repo.clone(), metadata_provider),
            check_out: CheckOutBookHandler::new(book_repo.clone()),
            check_in: CheckInBookHandler::new(book_repo.clone()),
            book_repo,
        }
    }

    pub async fn add_book(&self, isbn: String, title: Option<String>) -> AppResult<AddBookResult> {
        self.add_book.execute(AddBookCommand::new(isbn, title)).await
    }

    pub async fn check_out_book(&self, book_id: BookId) -> AppResult<CheckOutBookResult> {
        self.check_out
            .execute(CheckOutBookCommand::new(book_id))
            .await
    }

    pub async fn check_in_book(&self, title: String) -> AppResult<CheckInBookResult> {
        self.check_in.execute(CheckInBookCommand::new(title)).await
    }

    pub async fn get_book(&self, book_id: BookId) -> AppResult<Option<Book>> {
        self.book_repo.find_by_id(book_id).await
    }

    pub async fn find_book_by_title(&self, title: &str) -> AppResult<Option<Book>> {
        self.book_repo.find_by_title_ignore_case(title).await
    }

    pub async fn get_all_books(&self) -> AppResult<Vec<Book>> {
        self.book_repo.find_all().await
    }
}
