mod command;
mod handler;
mod result;

pub use command::PlaceBookOnShelfCommand;
pub use handler::PlaceBookOnShelfHandler;
pub use result::PlaceBookOnShelfResult;
