use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Reference to a book author by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorRef(String);

impl AuthorRef {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_author_name(&name)?;
        Ok(Self(name.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
