//! Text rendering surface: pure functions from entity data to display
//! strings.

use crate::modules::catalog::domain::entities::Book;
use crate::modules::placement::domain::entities::{Bookcase, Shelf};

/// Format a book as a multi-line "book card"
pub fn book_card(book: &Book) -> String {
    let authors = if book.authors.is_empty() {
        "Unknown author".to_string()
    } else {
        book.authors
            .iter()
            .map(|a| a.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut card = format!(
        "┌─ {}\n│  by {}\n│  ISBN {}\n│  Status: {}",
        book.title, authors, book.isbn, book.availability_status
    );

    if !book.publisher.is_empty() {
        card.push_str(&format!("\n│  Publisher: {}", book.publisher));
    }
    if book.shelf_id.is_none() {
        card.push_str("\n│  Not shelved");
    }
    card.push_str("\n└─");
    card
}

pub fn shelf_summary(shelf: &Shelf) -> String {
    format!(
        "{} (position {}): {}/{} books{}",
        shelf.label,
        shelf.position,
        shelf.book_ids.len(),
        shelf.book_capacity,
        if shelf.is_full() { " [FULL]" } else { "" }
    )
}

pub fn bookcase_summary(bookcase: &Bookcase, shelves: &[Shelf]) -> String {
    let mut lines = vec![format!(
        "{} (zone {}{}) - {} shelves, capacity {} per shelf",
        bookcase.location,
        bookcase.zone,
        bookcase.zone_index,
        bookcase.shelf_count,
        bookcase.book_capacity_per_shelf
    )];
    for shelf in shelves {
        lines.push(format!("  {}", shelf_summary(shelf)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::value_objects::{BookTitle, Isbn};
    use crate::shared::domain::value_objects::BookcaseId;

    #[test]
    fn book_card_shows_title_and_status() {
        let book = Book::new(
            BookTitle::parse("Dune").unwrap(),
            Isbn::parse("9780441172719").unwrap(),
        );
        let card = book_card(&book);
        assert!(card.contains("Dune"));
        assert!(card.contains("Available"));
        assert!(card.contains("Not shelved"));
    }

    #[test]
    fn shelf_summary_flags_full_shelves() {
        let mut shelf = Shelf::new(BookcaseId::new(), 1, "Shelf 1".to_string(), 1).unwrap();
        assert!(!shelf_summary(&shelf).contains("[FULL]"));

        shelf
            .add_book(crate::shared::domain::value_objects::BookId::new())
            .unwrap();
        assert!(shelf_summary(&shelf).contains("[FULL]"));
    }
}
