pub mod catalog;
pub mod metadata;
pub mod placement;
