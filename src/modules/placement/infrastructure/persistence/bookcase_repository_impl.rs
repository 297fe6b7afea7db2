use async_trait::async_trait;
use diesel::prelude::*;

use crate::modules::placement::domain::entities::Bookcase;
use crate::modules::placement::domain::repositories::BookcaseRepository;
use crate::modules::placement::infrastructure::models::{BookcaseModel, NewBookcase};
use crate::schema::bookcases;
use crate::shared::database::{DbConnection, DbPool};
use crate::shared::domain::value_objects::BookcaseId;
use crate::shared::errors::{AppError, AppResult};

pub struct BookcaseRepositoryImpl {
    pool: DbPool,
}

impl BookcaseRepositoryImpl {
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
impl BookcaseRepository for BookcaseRepositoryImpl {
    async fn save(&self, bookcase: &Bookcase) -> AppResult<()> {
        let new_bookcase = NewBookcase::from_domain(bookcase);
        let mut conn = self.get_conn()?;

        diesel::insert_into(bookcases::table)
            .values(&new_bookcase)
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to save bookcase: {}", e)))?;

        Ok(())
    }

    async fn find_by_id(&self, id: BookcaseId) -> AppResult<Option<Bookcase>> {
        let mut conn = self.get_conn()?;

        let model = bookcases::table
            .find(id.as_uuid())
            .first::<BookcaseModel>(&mut conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to load bookcase: {}", e)))?;

        Ok(model.map(BookcaseModel::into_domain))
    }

    async fn find_by_location(&self, location: &str) -> AppResult<Option<Bookcase>> {
        let mut conn = self.get_conn()?;

        let model = bookcases::table
            .filter(bookcases::location.eq(location))
            .first::<BookcaseModel>(&mut conn)
            .optional()
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to load bookcase by location: {}", e))
            })?;

        Ok(model.map(BookcaseModel::into_domain))
    }

    async fn find_all(&self) -> AppResult<Vec<Bookcase>> {
        let mut conn = self.get_conn()?;

        let models = bookcases::table
            .order(bookcases::location.asc())
            .load::<BookcaseModel>(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to load bookcases: {}", e)))?;

        Ok(models.into_iter().map(BookcaseModel::into_domain).collect())
    }

    async fn delete(&self, id: BookcaseId) -> AppResult<()> {
        let mut conn = self.get_conn()?;

        diesel::delete(bookcases::table.find(id.as_uuid()))
            .execute(&mut conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete bookcase: {}", e)))?;

        Ok(())
    }
}
