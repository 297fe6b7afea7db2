pub mod add_book;
pub mod check_in_book;
pub mod check_out_book;

pub use add_book::{AddBookCommand, AddBookHandler, AddBookResult};
pub use check_in_book::{CheckInBookCommand, CheckInBookHandler, CheckInBookResult};
pub use check_out_book::{CheckOutBookCommand, CheckOutBookHandler, CheckOutBookResult};
