pub mod common;
pub mod openlibrary;

pub use common::CommonHttpHandler;
