pub mod metadata_provider;

pub use metadata_provider::MetadataProvider;
