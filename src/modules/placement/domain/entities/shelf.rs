use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::domain::value_objects::{BookId, BookcaseId, ShelfId};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;

/// Shelf aggregate root.
///
/// A capacity-bounded container of books within a bookcase. Books are
/// tracked by ID only; the shelf never touches Book entities, so the two
/// aggregates stay consistent through the use-case layer rather than an
/// object graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub id: ShelfId,
    pub bookcase_id: BookcaseId,
    pub position: i32,
    pub label: String,
    pub book_capacity: i32,
    pub book_ids: Vec<BookId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Shelf {
    pub fn new(
        bookcase_id: BookcaseId,
        position: i32,
        label: String,
        book_capacity: i32,
    ) -> AppResult<Self> {
        Validator::validate_position(position)?;
        Validator::validate_shelf_label(&label)?;
        Validator::validate_capacity(book_capacity)?;

        let now = Utc::now();
        Ok(Self {
            id: ShelfId::new(),
            bookcase_id,
            position,
            label,
            book_capacity,
            book_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_full(&self) -> bool {
        self.book_ids.len() as i32 >= self.book_capacity
    }

    pub fn is_empty(&self) -> bool {
        self.book_ids.is_empty()
    }

    /// Record a book on this shelf. Rejects the placement when the shelf
    /// is already at capacity; adding a book that is already here is a
    /// no-op.
    pub fn add_book(&mut self, book_id: BookId) -> AppResult<()> {
        if self.book_ids.contains(&book_id) {
            return Ok(());
        }
        if self.is_full() {
            return Err(AppError::CapacityExceeded("Shelf is full".to_string()));
        }
        self.book_ids.push(book_id);
        self.updated_at = Utc::now();
        Ok(())
    }

    pub fn remove_book(&mut self, book_id: &BookId) -> bool {
        let original_len = self.book_ids.len();
        self.book_ids.retain(|id| id != book_id);

        if self.book_ids.len() < original_len {
            self.updated_at = Utc::now();
            true
        } else {
            false
        }
    }

    pub fn contains_book(&self, book_id: &BookId) -> bool {
        self.book_ids.contains(book_id)
    }
}
