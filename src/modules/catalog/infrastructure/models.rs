use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::catalog::domain::entities::Book;
use crate::modules::catalog::domain::value_objects::{
    AuthorRef, AvailabilityStatus, BookTitle, Isbn,
};
use crate::schema::books;
use crate::shared::domain::value_objects::{BookId, ShelfId};
use crate::shared::errors::AppResult;

// ============= BOOK MODELS =============

// For reading from database
#[derive(Queryable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = books)]
pub struct BookModel {
    pub id: Uuid,
    pub title: String,
    pub isbn: String,
    pub authors: serde_json::Value,
    pub publisher: String,
    pub description: String,
    pub shelf_id: Option<Uuid>,
    pub availability_status: AvailabilityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For inserting new books
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = books)]
pub struct NewBook {
    pub id: Uuid,
    pub title: String,
    pub isbn: String,
    pub authors: serde_json::Value,
    pub publisher: String,
    pub description: String,
    pub shelf_id: Option<Uuid>,
    pub availability_status: AvailabilityStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// For updating existing books (excludes id and created_at).
// treat_none_as_null so clearing a shelf assignment writes NULL.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = books)]
#[diesel(treat_none_as_null = true)]
pub struct BookChangeset {
    pub title: String,
    pub authors: serde_json::Value,
    pub publisher: String,
    pub description: String,
    pub shelf_id: Option<Uuid>,
    pub availability_status: AvailabilityStatus,
    pub updated_at: DateTime<Utc>,
}

impl BookModel {
    pub fn into_domain(self) -> AppResult<Book> {
        let author_names: Vec<String> = serde_json::from_value(self.authors)?;

        Ok(Book {
            id: BookId::from_uuid(self.id),
            title: BookTitle::parse(&self.title)?,
            isbn: Isbn::parse(&self.isbn)?,
            authors: author_names
                .into_iter()
                .filter_map(|name| AuthorRef::new(name).ok())
                .collect(),
            publisher: self.publisher,
            description: self.description,
            shelf_id: self.shelf_id.map(ShelfId::from_uuid),
            availability_status: self.availability_status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

fn author_names_json(book: &Book) -> AppResult<serde_json::Value> {
    let names: Vec<&str> = book.authors.iter().map(|a| a.as_str()).collect();
    Ok(serde_json::to_value(names)?)
}

impl NewBook {
    pub fn from_domain(book: &Book) -> AppResult<Self> {
        Ok(Self {
            id: book.id.as_uuid(),
            title: book.title.as_str().to_string(),
            isbn: book.isbn.as_str().to_string(),
            authors: author_names_json(book)?,
            publisher: book.publisher.clone(),
            description: book.description.clone(),
            shelf_id: book.shelf_id.map(|id| id.as_uuid()),
            availability_status: book.availability_status,
            created_at: book.created_at,
            updated_at: book.updated_at,
        })
    }
}

impl BookChangeset {
    pub fn from_domain(book: &Book) -> AppResult<Self> {
        Ok(Self {
            title: book.title.as_str().to_string(),
            authors: author_names_json(book)?,
            publisher: book.publisher.clone(),
            description: book.description.clone(),
            shelf_id: book.shelf_id.map(|id| id.as_uuid()),
            availability_status: book.availability_status,
            updated_at: book.updated_at,
        })
    }
}
