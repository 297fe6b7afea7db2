use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A validated ISBN-10 or ISBN-13, stored without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Isbn(String);

impl Isbn {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let normalized: String = raw
            .chars()
            .filter(|c| !matches!(c, '-' | ' '))
            .collect::<String>()
            .to_uppercase();
        Validator::validate_isbn(&normalized)?;
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Isbn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_separators_and_uppercases_check_char() {
        let isbn = Isbn::parse("978-0-441-17271-9").unwrap();
        assert_eq!(isbn.as_str(), "9780441172719");

        let isbn10 = Isbn::parse("0 8044 2957 x").unwrap();
        assert_eq!(isbn10.as_str(), "080442957X");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Isbn::parse("not-an-isbn").is_err());
        assert!(Isbn::parse("").is_err());
    }
}
