mod command;
mod handler;
mod result;

pub use command::CreateBookcaseCommand;
pub use handler::CreateBookcaseHandler;
pub use result::CreateBookcaseResult;
