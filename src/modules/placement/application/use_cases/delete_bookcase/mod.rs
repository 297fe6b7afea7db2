mod command;
mod handler;
mod result;

pub use command::DeleteBookcaseCommand;
pub use handler::DeleteBookcaseHandler;
pub use result::DeleteBookcaseResult;
