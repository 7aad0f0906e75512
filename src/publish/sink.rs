use std::path::Path;

use crate::{models::ContentIndex, Result};

/// Destination for everything an indexing run produces.
pub trait PublishSink {
    /// Replaces the published topic list and search index.
    fn write_index(&mut self, index: &ContentIndex) -> Result<()>;

    /// Copies a topic's asset directory to its publish location and returns
    /// the number of files copied.
    fn copy_assets(&mut self, slug: &str, source: &Path) -> Result<usize>;
}
