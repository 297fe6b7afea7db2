use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::catalog::domain::value_objects::{
    AuthorRef, AvailabilityStatus, BookTitle, Isbn,
};
use crate::shared::domain::value_objects::{BookId, ShelfId};
use crate::shared::errors::{AppError, AppResult};

/// Book aggregate root.
///
/// Holds the bibliographic record plus the one piece of real behavior a
/// book carries: the two-state circulation flag. Shelf capacity is NOT
/// checked here; placement validation belongs to the use-case layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: BookTitle,
    pub isbn: Isbn,
    pub authors: Vec<AuthorRef>,
    pub publisher: String,
    pub description: String,
    pub shelf_id: Option<ShelfId>,
    pub availability_status: AvailabilityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn new(title: BookTitle, isbn: Isbn) -> Self {
        let now = Utc::now();
        Self {
            id: BookId::new(),
            title,
            isbn,
            authors: Vec::new(),
            publisher: String::new(),
            description: String::new(),
            shelf_id: None,
            availability_status: AvailabilityStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_authors(mut self, authors: Vec<AuthorRef>) -> Self {
        self.authors = authors;
        self
    }

    pub fn with_publisher(mut self, publisher: String) -> Self {
        self.publisher = publisher;
        self
    }

    pub fn with_description(mut self, description: String) -> Self {
        self.description = description;
        self
    }

    /// Check the book out. Only an available book can be checked out.
    pub fn check_out(&mut self) -> AppResult<()> {
        if self.availability_status == AvailabilityStatus::CheckedOut {
            return Err(AppError::InvalidState(
                "book already checked out".to_string(),
            ));
        }
        self.availability_status = AvailabilityStatus::CheckedOut;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Return the book to circulation.
    ///
    /// Intentionally idempotent: checking in an already-available book is
    /// a no-op rather than an error, mirroring real library desk behavior
    /// where re-scanning a returned book should not fail.
    pub fn check_in(&mut self) {
        self.availability_status = AvailabilityStatus::Available;
        self.updated_at = Utc::now();
    }

    /// Record which shelf holds this book. Capacity is validated by the
    /// placement use case before this is called.
    pub fn assign_shelf(&mut self, shelf_id: ShelfId) {
        self.shelf_id = Some(shelf_id);
        self.updated_at = Utc::now();
    }

    pub fn clear_shelf(&mut self) {
        self.shelf_id = None;
        self.updated_at = Utc::now();
    }

    pub fn is_available(&self) -> bool {
        self.availability_status == AvailabilityStatus::Available
    }
}
