pub mod filesystem;
pub mod memory;
pub mod sink;

pub use filesystem::FsPublishSink;
pub use memory::MemorySink;
pub use sink::PublishSink;
