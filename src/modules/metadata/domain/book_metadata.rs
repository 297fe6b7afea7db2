use serde::{Deserialize, Serialize};

/// Bibliographic data returned by an external ISBN lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    pub title: String,
    pub authors: Vec<String>,
    pub publisher: String,
    pub description: String,
}

impl BookMetadata {
    pub fn new(title: String) -> Self {
        Self {
            title,
            authors: Vec::new(),
            publisher: String::new(),
            description: String::new(),
        }
    }
}
