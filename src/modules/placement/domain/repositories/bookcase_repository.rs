use async_trait::async_trait;

use crate::modules::placement::domain::entities::Bookcase;
use crate::shared::domain::value_objects::BookcaseId;
use crate::shared::errors::AppResult;

/// Port (interface) for the bookcase store - infrastructure provides the implementation
#[async_trait]
pub trait BookcaseRepository: Send + Sync {
    /// Persist a new bookcase
    async fn save(&self, bookcase: &Bookcase) -> AppResult<()>;

    /// Find bookcase by ID
    async fn find_by_id(&self, id: BookcaseId) -> AppResult<Option<Bookcase>>;

    /// Find bookcase by its location string (locations are unique)
    async fn find_by_location(&self, location: &str) -> AppResult<Option<Bookcase>>;

    /// All bookcases
    async fn find_all(&self) -> AppResult<Vec<Bookcase>>;

    /// Delete bookcase by ID
    async fn delete(&self, id: BookcaseId) -> AppResult<()>;
}
