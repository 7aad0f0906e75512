use std::path::{Path, PathBuf};

use crate::models::ContentIndex;
use crate::publish::sink::PublishSink;
use crate::Result;

/// In-memory sink for testing purposes.
/// Records what would have been published without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub index: Option<ContentIndex>,
    pub copied_assets: Vec<(String, PathBuf)>,
    pub writes: usize,
}

impl PublishSink for MemorySink {
    fn write_index(&mut self, index: &ContentIndex) -> Result<()> {
        self.index = Some(index.clone());
        self.writes += 1;
        Ok(())
    }

    fn copy_assets(&mut self, slug: &str, source: &Path) -> Result<usize> {
        self.copied_assets
            .push((slug.to_string(), source.to_path_buf()));
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_replaces_index() {
        let mut sink = MemorySink::default();
        sink.write_index(&ContentIndex::default()).unwrap();
        sink.write_index(&ContentIndex::default()).unwrap();

        assert_eq!(sink.writes, 2);
        assert_eq!(sink.index, Some(ContentIndex::default()));
    }

    #[test]
    fn test_memory_sink_records_assets() {
        let mut sink = MemorySink::default();
        let copied = sink.copy_assets("dns", Path::new("/content/dns/assets")).unwrap();

        assert_eq!(copied, 0);
        assert_eq!(
            sink.copied_assets,
            vec![("dns".to_string(), PathBuf::from("/content/dns/assets"))]
        );
    }
}
