use async_trait::async_trait;

use crate::modules::placement::domain::entities::Shelf;
use crate::shared::domain::value_objects::{BookcaseId, ShelfId};
use crate::shared::errors::AppResult;

/// Port (interface) for the shelf store - infrastructure provides the implementation
#[async_trait]
pub trait ShelfRepository: Send + Sync {
    /// Persist a new shelf
    async fn save(&self, shelf: &Shelf) -> AppResult<()>;

    /// Persist changes to an existing shelf
    async fn update(&self, shelf: &Shelf) -> AppResult<()>;

    /// Find shelf by ID, with its current occupancy hydrated
    async fn find_by_id(&self, id: ShelfId) -> AppResult<Option<Shelf>>;

    /// All shelves in the given bookcase, ordered by position
    async fn find_by_bookcase_id(&self, bookcase_id: BookcaseId) -> AppResult<Vec<Shelf>>;

    /// Delete shelf by ID
    async fn delete(&self, id: ShelfId) -> AppResult<()>;

    /// Delete every shelf in the given bookcase, returning how many were removed
    async fn delete_by_bookcase_id(&self, bookcase_id: BookcaseId) -> AppResult<u64>;
}
