/// Command for adding a book to the catalog by ISBN
#[derive(Debug, Clone)]
pub struct AddBookCommand {
    pub isbn: String,
    /// Manual title override; also the fallback when metadata lookup fails
    pub title: Option<String>,
}

impl AddBookCommand {
    pub fn new(isbn: String, title: Option<String>) -> Self {
        Self { isbn, title }
    }
}
