use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::placement::domain::entities::{Bookcase, Shelf};
use crate::schema::{bookcases, shelves};
use crate::shared::domain::value_objects::{BookId, BookcaseId, ShelfId};

// ============= SHELF MODELS =============

// For reading from database; occupancy is hydrated separately from the
// books table (books.shelf_id is the source of truth).
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = shelves)]
pub struct ShelfModel {
    pub id: Uuid,
    pub bookcase_id: Uuid,
    pub position: i32,
    pub label: String,
    pub book_capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new shelves
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = shelves)]
pub struct NewShelf {
    pub id: Uuid,
    pub bookcase_id: Uuid,
    pub position: i32,
    pub label: String,
    pub book_capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For updating existing shelves (excludes id, bookcase_id, created_at)
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = shelves)]
pub struct ShelfChangeset {
    pub position: i32,
    pub label: String,
    pub book_capacity: i32,
    pub updated_at: DateTime<Utc>,
}

impl ShelfModel {
    pub fn into_domain(self, book_ids: Vec<BookId>) -> Shelf {
        Shelf {
            id: ShelfId::from_uuid(self.id),
            bookcase_id: BookcaseId::from_uuid(self.bookcase_id),
            position: self.position,
            label: self.label,
            book_capacity: self.book_capacity,
            book_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewShelf {
    pub fn from_domain(shelf: &Shelf) -> Self {
        Self {
            id: shelf.id.as_uuid(),
            bookcase_id: shelf.bookcase_id.as_uuid(),
            position: shelf.position,
            label: shelf.label.clone(),
            book_capacity: shelf.book_capacity,
            created_at: shelf.created_at,
            updated_at: shelf.updated_at,
        }
    }
}

impl ShelfChangeset {
    pub fn from_domain(shelf: &Shelf) -> Self {
        Self {
            position: shelf.position,
            label: shelf.label.clone(),
            book_capacity: shelf.book_capacity,
            updated_at: shelf.updated_at,
        }
    }
}

// ============= BOOKCASE MODELS =============

#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = bookcases)]
pub struct BookcaseModel {
    pub id: Uuid,
    pub owner_id: String,
    pub location: String,
    pub zone: String,
    pub zone_index: String,
    pub shelf_count: i32,
    pub book_capacity_per_shelf: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = bookcases)]
pub struct NewBookcase {
    pub id: Uuid,
    pub owner_id: String,
    pub location: String,
    pub zone: String,
    pub zone_index: String,
    pub shelf_count: i32,
    pub book_capacity_per_shelf: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BookcaseModel {
    pub fn into_domain(self) -> Bookcase {
        Bookcase {
            id: BookcaseId::from_uuid(self.id),
            owner_id: self.owner_id,
            location: self.location,
            zone: self.zone,
            zone_index: self.zone_index,
            shelf_count: self.shelf_count,
            book_capacity_per_shelf: self.book_capacity_per_shelf,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl NewBookcase {
    pub fn from_domain(bookcase: &Bookcase) -> Self {
        Self {
            id: bookcase.id.as_uuid(),
            owner_id: bookcase.owner_id.clone(),
            location: bookcase.location.clone(),
            zone: bookcase.zone.clone(),
            zone_index: bookcase.zone_index.clone(),
            shelf_count: bookcase.shelf_count,
            book_capacity_per_shelf: bookcase.book_capacity_per_shelf,
            created_at: bookcase.created_at,
            updated_at: bookcase.updated_at,
        }
    }
}
