use async_trait::async_trait;
use std::sync::Arc;

use crate::log_warn;
use crate::modules::catalog::application::ports::MetadataProvider;
use crate::modules::catalog::domain::entities::Book;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::modules::catalog::domain::value_objects::{AuthorRef, BookTitle, Isbn};
use crate::shared::{application::use_case::UseCase, errors::AppError, errors::AppResult};

use super::{command::AddBookCommand, result::AddBookResult};

/// Use case handler for cataloging a new book.
///
/// Bibliographic data comes from the external ISBN metadata provider; a
/// caller-supplied title acts as the fallback when the lookup fails.
pub struct AddBookHandler {
    book_repository: Arc<dyn BookRepository>,
    metadata_provider: Arc<dyn MetadataProvider>,
}

impl AddBookHandler {
    pub fn new(
        book_repository: Arc<dyn BookRepository>,
        metadata_provider: Arc<dyn MetadataProvider>,
    ) -> Self {
        Self {
            book_repository,
            metadata_provider,
        }
    }
}

#[async_trait]
impl UseCase<AddBookCommand, AddBookResult> for AddBookHandler {
    async fn execute(&self, command: AddBookCommand) -> AppResult<AddBookResult> {
        let isbn = Isbn::parse(&command.isbn)?;

        if self.book_repository.find_by_isbn(&isbn).await?.is_some() {
            return Err(AppError::Duplicate(format!(
                "Book with ISBN {} already exists",
                isbn
            )));
        }

        let (book, metadata_resolved) = match self.metadata_provider.lookup(&isbn).await {
            Ok(metadata) => {
                let title = match &command.title {
                    Some(manual) => BookTitle::parse(manual)?,
                    None => BookTitle::parse(&metadata.title)?,
                };
                let authors = metadata
                    .authors
                    .iter()
                    .filter_map(|name| AuthorRef::new(name.as_str()).ok())
                    .collect();
                let book = Book::new(title, isbn.clone())
                    .with_authors(authors)
                    .with_publisher(metadata.publisher)
                    .with_description(metadata.description);
                (book, true)
            }
            Err(err) => {
                // Only fall back to a bare record when the caller typed a
                // title themselves; otherwise surface the lookup failure.
                let Some(manual) = &command.title else {
                    return Err(err);
                };
                log_warn!("Metadata lookup failed for ISBN {}: {}", isbn, err);
                (Book::new(BookTitle::parse(manual)?, isbn.clone()), false)
            }
        };

        self.book_repository.save(&book).await?;

        Ok(AddBookResult::new(
            book.id,
            book.title.as_str().to_string(),
            metadata_resolved,
        ))
    }
}
