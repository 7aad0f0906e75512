pub mod settings;

pub use settings::{CatalogConfig, Config, ContentConfig, KeyFile, OutputConfig};
