pub mod bookcase;
pub mod shelf;

pub use bookcase::Bookcase;
pub use shelf::Shelf;
