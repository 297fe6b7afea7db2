use async_trait::async_trait;
use reqwest::Client;

use crate::log_debug;
use crate::modules::catalog::application::ports::MetadataProvider;
use crate::modules::catalog::domain::value_objects::Isbn;
use crate::modules::metadata::infrastructure::external::common::CommonHttpHandler;
use crate::modules::metadata::BookMetadata;
use crate::shared::errors::{AppError, AppResult};

use super::{dto::OpenLibraryBooksResponse, mapper::OpenLibraryMapper};

pub struct OpenLibraryClient {
    client: Client,
    base_url: String,
}

impl OpenLibraryClient {
    pub fn new() -> AppResult<Self> {
        Self::with_base_url("https://openlibrary.org".to_string())
    }

    pub fn with_base_url(base_url: String) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(10, "Shelfward-Library/1.0")?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl MetadataProvider for OpenLibraryClient {
    async fn lookup(&self, isbn: &Isbn) -> AppResult<BookMetadata> {
        let bibkey = format!("ISBN:{}", isbn);
        let url = format!("{}/api/books", self.base_url);

        log_debug!("Open Library lookup for {}", bibkey);

        let response = CommonHttpHandler::execute_with_retry(
            || {
                self.client
                    .get(&url)
                    .query(&[
                        ("bibkeys", bibkey.as_str()),
                        ("format", "json"),
                        ("jscmd", "data"),
                    ])
                    .send()
            },
            "Open Library",
            "lookup ISBN",
        )
        .await?;

        let mut payload = response
            .json::<OpenLibraryBooksResponse>()
            .await
            .map_err(|e| {
                AppError::ApiError(format!("Failed to parse Open Library response: {}", e))
            })?;

        // A miss comes back as 200 with an empty object
        let data = payload
            .remove(&bibkey)
            .ok_or_else(|| AppError::NotFound(format!("No metadata found for ISBN {}", isbn)))?;

        Ok(OpenLibraryMapper::to_metadata(data))
    }
}
