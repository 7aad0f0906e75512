pub mod engine;

pub use engine::{SearchEngine, SearchQuery, DEFAULT_RESULT_LIMIT};
