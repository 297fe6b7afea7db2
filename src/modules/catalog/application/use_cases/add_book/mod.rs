mod command;
mod handler;
mod result;

pub use command::AddBookCommand;
pub use handler::AddBookHandler;
pub use result::AddBookResult;
