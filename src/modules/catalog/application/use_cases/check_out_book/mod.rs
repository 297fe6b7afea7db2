mod command;
mod handler;
mod result;

pub use command::CheckOutBookCommand;
pub use handler::CheckOutBookHandler;
pub use result::CheckOutBookResult;
