pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod indexing;
pub mod markdown;
pub mod models;
pub mod publish;
pub mod search;
pub mod utils;

pub use config::Config;
pub use error::{IndexerError, Result};
pub use indexing::{IndexingEngine, IndexingStats};
pub use models::{ContentIndex, FileRef, SearchEntry, Topic};
pub use publish::{FsPublishSink, MemorySink, PublishSink};
