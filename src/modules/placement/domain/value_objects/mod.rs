pub mod placement;

pub use placement::Placement;
