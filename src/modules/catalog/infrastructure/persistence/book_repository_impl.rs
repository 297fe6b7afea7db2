use async_trait::async_trait;
use diesel::prelude::*;

use crate::modules::catalog::domain::entities::Book;
use crate::modules::catalog::domain::repositories::BookRepository;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::modules::catalog::infrastructure::models::{BookChangeset, BookModel, NewBook};
use crate::schema::books;
use crate::shared::database::{DbConnection, DbPool};
use crate::shared::domain::value_objects::{BookId, ShelfId};
use crate::shared::errors::{AppError, AppResult};

diesel::define_sql_function! {
    fn lower(x: diesel::sql_types::Text) -> diesel::sql_types::Text
}

pub struct BookRepositoryImpl {
    pool: DbPool,
}

impl BookRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool
            .get()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get connection: {}", e)))
    }
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn save(&self, book: &Book) -> AppResult<()> {
        let new_book = NewBook::from_domain(book)?;
        let mut conn = self.get_conn()?;

        diesel::insert_into(books::table)
            .values(&new_book)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to save book: {}", e)))?;

        Ok(())
    }

    async fn update(&self, book: &Book) -> AppResult<()> {
        let changeset = BookChangeset::from_domain(book)?;
        let mut conn = self.get_conn()?;

        let affected = diesel::update(books::table.find(book.id.as_uuid()))
            .set(&changeset)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to update book: {}", e)))?;

        if affected == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", book.id)));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: BookId) -> AppResult<Option<Book>> {
        let mut conn = self.get_conn()?;

        let model = books::table
            .find(id.as_uuid())
            .first::<BookModel>(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to load book: {}", e)))?;

        model.map(BookModel::into_domain).transpose()
    }

    async fn find_by_isbn(&self, isbn: &Isbn) -> AppResult<Option<Book>> {
        let mut conn = self.get_conn()?;

        let model = books::table
            .filter(books::isbn.eq(isbn.as_str()))
            .first::<BookModel>(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to load book by ISBN: {}", e)))?;

        model.map(BookModel::into_domain).transpose()
    }

    async fn find_by_title_ignore_case(&self, title: &str) -> AppResult<Option<Book>> {
        let mut conn = self.get_conn()?;

        let model = books::table
            .filter(lower(books::title).eq(title.trim().to_lowercase()))
            .first::<BookModel>(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to load book by title: {}", e)))?;

        model.map(BookModel::into_domain).transpose()
    }

    async fn find_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<Vec<Book>> {
        let mut conn = self.get_conn()?;

        let models = books::table
            .filter(books::shelf_id.eq(Some(shelf_id.as_uuid())))
            .order(books::created_at.asc())
            .load::<BookModel>(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to load shelf books: {}", e)))?;

        models.into_iter().map(BookModel::into_domain).collect()
    }

    async fn count_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<u64> {
        let mut conn = self.get_conn()?;

        let count: i64 = books::table
            .filter(books::shelf_id.eq(Some(shelf_id.as_uuid())))
            .count()
            .get_result(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to count shelf books: {}", e)))?;

        Ok(count as u64)
    }

    async fn find_all(&self) -> AppResult<Vec<Book>> {
        let mut conn = self.get_conn()?;

        let models = books::table
            .order(books::title.asc())
            .load::<BookModel>(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to load books: {}", e)))?;

        models.into_iter().map(BookModel::into_domain).collect()
    }

    async fn delete(&self, id: BookId) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::delete(books::table.find(id.as_uuid()))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete book: {}", e)))?;

        Ok(())
    }

    async fn delete_by_shelf_id(&self, shelf_id: ShelfId) -> AppResult<u64> {
        let mut conn = self.get_conn()?;

        let deleted = diesel::delete(
            books::table.filter(books::shelf_id.eq(Some(shelf_id.as_uuid()))),
        )
        .execute(&mut conn)
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete shelf books: {}", e)))?;

        Ok(deleted as u64)
    }
}
