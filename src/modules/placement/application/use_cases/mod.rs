pub mod create_bookcase;
pub mod delete_bookcase;
pub mod place_book_on_shelf;

pub use create_bookcase::{CreateBookcaseCommand, CreateBookcaseHandler, CreateBookcaseResult};
pub use delete_bookcase::{DeleteBookcaseCommand, DeleteBookcaseHandler, DeleteBookcaseResult};
pub use place_book_on_shelf::{
    PlaceBookOnShelfCommand, PlaceBookOnShelfHandler, PlaceBookOnShelfResult,
};
