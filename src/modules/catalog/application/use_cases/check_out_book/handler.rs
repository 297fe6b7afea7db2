use async_trait::async_trait;
use std::sync::Arc;

use crate::log_info;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::shared::{application::use_case::UseCase, errors::AppError, errors::AppResult};

use super::{command::CheckOutBookCommand, result::CheckOutBookResult};

/// Use case handler for checking a book out.
/// A book that is already checked out cannot be checked out again.
pub struct CheckOutBookHandler {
    book_repository: Arc<dyn BookRepository>,
}

impl CheckOutBookHandler {
    pub fn new(book_repository: Arc<dyn BookRepository>) -> Self {
        Self { book_repository }
    }
}

#[async_trait]
impl UseCase<CheckOutBookCommand, CheckOutBookResult> for CheckOutBookHandler {
    async fn execute(&self, command: CheckOutBookCommand) -> AppResult<CheckOutBookResult> {
        let mut book = self
            .book_repository
            .find_by_id(command.book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book {} not found", command.book_id)))?;

        book.check_out()?;
        self.book_repository.update(&book).await?;

        log_info!("Checked out '{}'", book.title);

        Ok(CheckOutBookResult::new(
            book.id,
            book.title.as_str().to_string(),
            book.availability_status,
        ))
    }
}
