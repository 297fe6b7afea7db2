/// Command for checking a book back in, looked up by title
#[derive(Debug, Clone)]
pub struct CheckInBookCommand {
    pub title: String,
}

impl CheckInBookCommand {
    pub fn new(title: String) -> Self {
        Self { title }
    }
}
