use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A non-blank book title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let trimmed = raw.trim();
        Validator::validate_book_title(trimmed)?;
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive exact match, used by check-in-by-title lookups
    pub fn matches_ignore_case(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.trim().to_lowercase()
    }
}

impl fmt::Display for BookTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_keeps_content() {
        let title = BookTitle::parse("  Dune ").unwrap();
        assert_eq!(title.as_str(), "Dune");
    }

    #[test]
    fn rejects_blank_titles() {
        assert!(BookTitle::parse("").is_err());
        assert!(BookTitle::parse("   ").is_err());
    }

    #[test]
    fn matching_ignores_case() {
        let title = BookTitle::parse("Dune").unwrap();
        assert!(title.matches_ignore_case("dune"));
        assert!(title.matches_ignore_case("  DUNE "));
        assert!(!title.matches_ignore_case("Dune Messiah"));
    }
}
