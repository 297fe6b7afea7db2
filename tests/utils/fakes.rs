//! In-memory repository fakes for exercising the use-case layer without
//! a database.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use uuid::Uuid;

use shelfward::modules::catalog::application::ports::MetadataProvider;
use shelfward::modules::catalog::domain::entities::Book;
use shelfward::modules::catalog::domain::repositories::BookRepository;
use shelfward::modules::catalog::domain::value_objects::Isbn;
use shelfward::modules::metadata::BookMetadata;
use shelfward::modules::placement::domain::entities::{Bookcase, Shelf};
use shelfward::modules::placement::domain::repositories::{BookcaseRepository, ShelfRepository};
use shelfward::shared::domain::value_objects::{BookId, BookcaseId, ShelfId};
use shelfward::shared::errors::{AppError, AppResult};

// Mock for the external ISBN metadata provider
mockall::mock! {
    pub Metadata {}

    #[async_trait]
    impl MetadataProvider for Metadata {
        async fn lookup(&self, isbn: &Isbn) -> AppResult<BookMetadata>;
    }
}

#[derive(Default)]
pub struct InMemoryBookRepository {
    books: Mutex<HashMap<Uuid, Book>>,
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn save(&self, book: &Book) -> AppResult<()> {
        self.books
            .lock()
            .unwrap()
            .insert(book.id.as_uuid(), book.clone());
        Ok(())
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let mut books = self.books.lock().unwrap();
        if !books.contains_key(&book.id.as_uuid()) {
            return Err(AppError::NotFound(format!("Book {} not found", book.id)));
        }
        books.insert(book.id.as_uuid(), book.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: BookId) -> AppResult<Option<Book>> {
        Ok(self.books.lock().unwrap().get(&id.as_uuid()).cloned())
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> AppResult<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .values()
            .find(|b| &b.isbn == isbn)
            .cloned())
    }

    async fn find_by_title_ignore_case(&self, title: &str) -> AppResult<Option<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .values()
            .find(|b| b.title.matches_ignore_case(title))
            .cloned())
    }

    async fn find_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<Vec<Book>> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|b| b.shelf_id == Some(shelf_id))
            .cloned()
            .collect())
    }

    async fn count_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<u64> {
        Ok(self
            .books
            .lock()
            .unwrap()
            .values()
            .filter(|b| b.shelf_id == Some(shelf_id))
            .count() as u64)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        Ok(self.books.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: BookId) -> AppResult<()> {
        self.books.lock().unwrap().remove(&id.as_uuid());
        Ok(())
    }

    async fn delete_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<u64> {
        let mut books = self.books.lock().unwrap();
        let before = books.len();
        books.retain(|_, b| b.shelf_id != Some(shelf_id));
        Ok((before - books.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryShelfRepository {
    shelves: Mutex<HashMap<Uuid, Shelf>>,
    /// Number of `save` calls, for verifying side-effect-free rejections
    pub save_calls: AtomicUsize,
}

#[async_trait]
impl ShelfRepository for InMemoryShelfRepository {
    async fn save(&self, shelf: &Shelf) -> AppResult<()> {
        self.save_calls.fetch_add(1, Ordering::SeqCst);
        self.shelves
            .lock()
            .unwrap()
            .insert(shelf.id.as_uuid(), shelf.clone());
        Ok(())
    }

    async fn update(&self, shelf: &Shelf) -> AppResult<()> {
        let mut shelves = self.shelves.lock().unwrap();
        if !shelves.contains_key(&shelf.id.as_uuid()) {
            return Err(AppError::NotFound(format!("Shelf {} not found", shelf.id)));
        }
        shelves.insert(shelf.id.as_uuid(), shelf.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ShelfId) -> AppResult<Option<Shelf>> {
        Ok(self.shelves.lock().unwrap().get(&id.as_uuid()).cloned())
    }

    async fn find_by_bookcase_id(&self, bookcase_id: BookcaseId) -> AppResult<Vec<Shelf>> {
        let mut shelves: Vec<Shelf> = self
            .shelves
            .lock()
            .unwrap()
            .values()
            .filter(|s| s.bookcase_id == bookcase_id)
            .cloned()
            .collect();
        shelves.sort_by_key(|s| s.position);
        Ok(shelves)
    }

    async fn delete(&self, id: ShelfId) -> AppResult<()> {
        self.shelves.lock().unwrap().remove(&id.as_uuid());
        Ok(())
    }

    async fn delete_by_bookcase_id(&self, bookcase_id: BookcaseId) -> AppResult<u64> {
        let mut shelves = self.shelves.lock().unwrap();
        let before = shelves.len();
        shelves.retain(|_, s| s.bookcase_id != bookcase_id);
        Ok((before - shelves.len()) as u64)
    }
}

#[derive(Default)]
pub struct InMemoryBookcaseRepository {
    bookcases: Mutex<HashMap<Uuid, Bookcase>>,
}

#[async_trait]
impl BookcaseRepository for InMemoryBookcaseRepository {
    async fn save(&self, bookcase: &Bookcase) -> AppResult<()> {
        self.bookcases
            .lock()
            .unwrap()
            .insert(bookcase.id.as_uuid(), bookcase.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: BookcaseId) -> AppResult<Option<Bookcase>> {
        Ok(self.bookcases.lock().unwrap().get(&id.as_uuid()).cloned())
    }

    async fn find_by_location(&self, location: &str) -> AppResult<Option<Bookcase>> {
        Ok(self
            .bookcases
            .lock()
            .unwrap()
            .values()
            .find(|b| b.location == location)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Bookcase>> {
        Ok(self.bookcases.lock().unwrap().values().cloned().collect())
    }

    async fn delete(&self, id: BookcaseId) -> AppResult<()> {
        self.bookcases.lock().unwrap().remove(&id.as_uuid());
        Ok(())
    }
}
