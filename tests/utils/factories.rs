use shelfward::modules::catalog::domain::entities::Book;
use shelfward::modules::catalog::domain::value_objects::{BookTitle, Isbn};
use shelfward::modules::metadata::BookMetadata;
use shelfward::modules::placement::application::use_cases::CreateBookcaseCommand;

pub const DUNE_ISBN: &str = "9780441172719";
pub const HYPERION_ISBN: &str = "9780553283686";

pub fn book(title: &str, isbn: &str) -> Book {
    Book::new(
        BookTitle::parse(title).unwrap(),
        Isbn::parse(isbn).unwrap(),
    )
}

pub fn dune_metadata() -> BookMetadata {
    BookMetadata {
        title: "Dune".to_string(),
        authors: vec!["Frank Herbert".to_string()],
        publisher: "Ace Books".to_string(),
        description: "Desert planet, giant worms.".to_string(),
    }
}

pub fn create_bookcase_command(
    location: &str,
    shelf_count: i32,
    book_capacity_per_shelf: i32,
) -> CreateBookcaseCommand {
    CreateBookcaseCommand::new(
        "owner-1".to_string(),
        location.to_string(),
        "A".to_string(),
        "1".to_string(),
        shelf_count,
        book_capacity_per_shelf,
    )
}
