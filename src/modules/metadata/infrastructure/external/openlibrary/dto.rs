use serde::Deserialize;
use std::collections::HashMap;

/// Response body of `GET /api/books?bibkeys=ISBN:...&format=json&jscmd=data`,
/// keyed by the requested bibkey.
pub type OpenLibraryBooksResponse = HashMap<String, OpenLibraryBookData>;

#[derive(Debug, Clone, Deserialize)]
pub struct OpenLibraryBookData {
    pub title: String,
    #[serde(default)]
    pub authors: Vec<OpenLibraryAuthor>,
    #[serde(default)]
    pub publishers: Vec<OpenLibraryPublisher>,
    #[serde(default)]
    pub excerpts: Vec<OpenLibraryExcerpt>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenLibraryAuthor {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenLibraryPublisher {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenLibraryExcerpt {
    pub text: String,
}
