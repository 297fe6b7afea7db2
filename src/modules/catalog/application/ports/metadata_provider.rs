use async_trait::async_trait;

use crate::modules::catalog::domain::value_objects::Isbn;
use crate::modules::metadata::BookMetadata;
use crate::shared::errors::AppResult;

/// Port (interface) for external ISBN metadata lookup.
/// Infrastructure provides the implementation (Open Library client).
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Look up bibliographic data for the given ISBN
    async fn lookup(&self, isbn: &Isbn) -> AppResult<BookMetadata>;
}
