//! Interactive input surface for the cataloging session.
//!
//! Thin glue over stdin/stdout; no business rules live here.

use std::io::{self, BufRead, Write};

use crate::modules::placement::domain::entities::Shelf;
use crate::shared::domain::value_objects::ShelfId;
use crate::shared::errors::{AppError, AppResult};

pub fn prompt_line(label: &str) -> AppResult<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub fn prompt_book_title() -> AppResult<String> {
    prompt_line("Book title")
}

pub fn prompt_isbn() -> AppResult<String> {
    prompt_line("ISBN")
}

/// Present the given shelves and read a 1-based selection
pub fn prompt_shelf_selection(shelves: &[Shelf]) -> AppResult<ShelfId> {
    if shelves.is_empty() {
        return Err(AppError::NotFound("No shelves to choose from".to_string()));
    }

    for (index, shelf) in shelves.iter().enumerate() {
        println!(
            "  {}. {} ({}/{} books)",
            index + 1,
            shelf.label,
            shelf.book_ids.len(),
            shelf.book_capacity
        );
    }

    let input = prompt_line("Shelf number")?;
    let choice: usize = input
        .parse()
        .map_err(|_| AppError::ValidationError(format!("'{}' is not a number", input)))?;

    shelves
        .get(choice.wrapping_sub(1))
        .map(|shelf| shelf.id)
        .ok_or_else(|| {
            AppError::ValidationError(format!(
                "Shelf number must be between 1 and {}",
                shelves.len()
            ))
        })
}

pub fn confirm(question: &str) -> AppResult<bool> {
    let answer = prompt_line(&format!("{} [y/N]", question))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
