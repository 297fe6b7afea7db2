use super::dto::OpenLibraryBookData;
use crate::modules::metadata::BookMetadata;

pub struct OpenLibraryMapper;

impl OpenLibraryMapper {
    pub fn to_metadata(data: OpenLibraryBookData) -> BookMetadata {
        // Open Library has no dedicated description field on this endpoint;
        // publisher notes or the first excerpt are the closest thing.
        let description = data
            .notes
            .filter(|n| !n.trim().is_empty())
            .or_else(|| data.excerpts.into_iter().map(|e| e.text).next())
            .unwrap_or_default();

        BookMetadata {
            title: data.title,
            authors: data.authors.into_iter().map(|a| a.name).collect(),
            publisher: data
                .publishers
                .into_iter()
                .map(|p| p.name)
                .next()
                .unwrap_or_default(),
            description,
        }
    }
}
