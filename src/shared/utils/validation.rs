use regex::Regex;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_book_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Title cannot be blank".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::ValidationError(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate a normalized ISBN (hyphens and spaces already stripped).
    /// Accepts ISBN-10 (nine digits plus a digit or `X` check character)
    /// and ISBN-13 (thirteen digits).
    pub fn validate_isbn(isbn: &str) -> Result<(), AppError> {
        let re = Regex::new(r"^(?:\d{9}[\dX]|\d{13})$").unwrap();
        if !re.is_match(isbn) {
            return Err(AppError::ValidationError(
                "ISBN must be 10 or 13 digits".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_author_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Author name cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_shelf_label(label: &str) -> Result<(), AppError> {
        if label.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Shelf label cannot be blank".to_string(),
            ));
        }
        if label.len() > 100 {
            return Err(AppError::ValidationError(
                "Shelf label too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_position(position: i32) -> Result<(), AppError> {
        if position < 1 {
            return Err(AppError::ValidationError(
                "Shelf position must be 1 or greater".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_capacity(capacity: i32) -> Result<(), AppError> {
        if capacity < 1 {
            return Err(AppError::ValidationError(
                "Capacity must be 1 or greater".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_shelf_count(count: i32) -> Result<(), AppError> {
        if count < 1 {
            return Err(AppError::ValidationError(
                "Shelf count must be 1 or greater".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_location(location: &str) -> Result<(), AppError> {
        if location.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Location cannot be blank".to_string(),
            ));
        }
        if location.len() > 100 {
            return Err(AppError::ValidationError(
                "Location too long (max 100 characters)".to_string(),
            ));
        }
        Ok(())
    }
}
