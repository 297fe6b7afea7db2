use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::placement::domain::entities::Shelf;
use crate::modules::placement::domain::repositories::ShelfRepository;
use crate::modules::placement::infrastructure::models::{NewShelf, ShelfChangeset, ShelfModel};
use crate::schema::{books, shelves};
use crate::shared::database::{DbConnection, DbPool};
use crate::shared::domain::value_objects::{BookId, BookcaseId, ShelfId};
use crate::shared::errors::{AppError, AppResult};

pub struct ShelfRepositoryImpl {
    pool: DbPool,
}

impl ShelfRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn get_conn(&self) -> AppResult<DbConnection> {
        self.pool
            .get()
            .map_err(|e| AppError::DatabaseError(format!("Failed to get connection: {}", e)))
    }

    // Occupancy lives on the books table; hydrate it when loading a shelf
    fn load_book_ids(conn: &mut DbConnection, shelf_id: Uuid) -> AppResult<Vec<BookId>> {
        let ids = books::table
            .filter(books::shelf_id.eq(Some(shelf_id)))
            .order(books::created_at.asc())
            .select(books::id)
            .load::<Uuid>(conn)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to load shelf occupancy: {}", e))
            })?;

        Ok(ids.into_iter().map(BookId::from_uuid).collect())
    }
}

#[async_trait]
impl ShelfRepository for ShelfRepositoryImpl {
    async fn save(&self, shelf: &Shelf) -> AppResult<()> {
        let new_shelf = NewShelf::from_domain(shelf);
        let mut conn = self.get_conn()?;

        diesel::insert_into(shelves::table)
            .values(&new_shelf)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to save shelf: {}", e)))?;

        Ok(())
    }

    async fn update(&self, shelf: &Shelf) -> AppResult<()> {
        // Occupancy is derived from books.shelf_id, so only the shelf's
        // own fields are written here.
        let changeset = ShelfChangeset::from_domain(shelf);
        let mut conn = self.get_conn()?;

        let affected = diesel::update(shelves::table.find(shelf.id.as_uuid()))
            .set(&changeset)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to update shelf: {}", e)))?;

        if affected == 0 {
            return Err(AppError::NotFound(format!("Shelf {} not found", shelf.id)));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: ShelfId) -> AppResult<Option<Shelf>> {
        let mut conn = self.get_conn()?;

        let model = shelves::table
            .find(id.as_uuid())
            .first::<ShelfModel>(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to load shelf: {}", e)))?;

        match model {
            Some(model) => {
                let book_ids = Self::load_book_ids(&mut conn, model.id)?;
                Ok(Some(model.into_domain(book_ids)))
            }
            None => Ok(None),
        }
    }

    async fn find_by_bookcase_id(&self, bookcase_id: BookcaseId) -> AppResult<Vec<Shelf>> {
        let mut conn = self.get_conn()?;

        let models = shelves::table
            .filter(shelves::bookcase_id.eq(bookcase_id.as_uuid()))
            .order(shelves::position.asc())
            .load::<ShelfModel>(&mut conn)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to load bookcase shelves: {}", e))
            })?;

        let mut result = Vec::with_capacity(models.len());
        for model in models {
            let book_ids = Self::load_book_ids(&mut conn, model.id)?;
            result.push(model.into_domain(book_ids));
        }

        Ok(result)
    }

    async fn delete(&self, id: ShelfId) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::delete(shelves::table.find(id.as_uuid()))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete shelf: {}", e)))?;

        Ok(())
    }

    async fn delete_by_bookcase_id(&self, bookcase_id: BookcaseId) -> AppResult<u64> {
        let mut conn = self.get_conn()?;

        let deleted = diesel::delete(
            shelves::table.filter(shelves::bookcase_id.eq(bookcase_id.as_uuid())),
        )
        .execute(&mut conn)
        .map_err(|e| AppError::DatabaseError(format!("Failed to delete bookcase shelves: {}", e)))?;

        Ok(deleted as u64)
    }
}
