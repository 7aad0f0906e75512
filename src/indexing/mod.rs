pub mod engine;
pub mod resolver;
pub mod scanner;

pub use engine::{IndexingEngine, IndexingStats};
pub use resolver::{ResolvedTopic, TopicResolver, TopicSource};
pub use scanner::{DirectoryScanner, TopicDir};
