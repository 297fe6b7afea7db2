mod command;
mod handler;
mod result;

pub use command::CheckInBookCommand;
pub use handler::CheckInBookHandler;
pub use result::CheckInBookResult;
