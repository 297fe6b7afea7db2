use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::shared::{application::use_case::UseCase, errors::AppError, errors::AppResult};

use super::{command::CheckInBookCommand, result::CheckInBookResult};

/// Use case handler for returning a book to circulation.
///
/// The book is looked up by title (case-insensitive exact match, the way
/// a returned book is identified at the desk). Check-in itself is
/// idempotent; see `Book::check_in`.
pub struct CheckInBookHandler {
    book_repository: Arc<dyn BookRepository>,
}

impl CheckInBookHandler {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }
}

#[async_trait]
impl UseCase<CheckInBookCommand, CheckInBookResult> for CheckInBookHandler {
    async fn execute(&self, command: CheckInBookCommand) -> AppResult<CheckInBookResult> {
        let mut book = self
            .book_repository
            .find_by_title_ignore_case(command.title.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No book titled '{}'", command.title)))?;

        book.check_in();
        self.book_repository.update(&book).await?;

        log_info!("Checked in '{}'", book.title);

        Ok(CheckInBookResult::new(
            book.id,
            book.title.as_str().to_string(),
            book.availability_status,
        ))
    }
}
