pub mod application;
pub mod database;
pub mod domain;
pub mod errors;
pub mod utils;
