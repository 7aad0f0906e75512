use log::{debug, info};

use crate::{
    config::Config,
    error::Result,
    indexing::{
        resolver::{TopicResolver, TopicSource},
        scanner::DirectoryScanner,
    },
    models::ContentIndex,
    publish::PublishSink,
};

pub struct IndexingEngine {
    config: Config,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct IndexingStats {
    pub directories_scanned: usize,
    pub directories_skipped: usize,
    pub topics: usize,
    pub search_entries: usize,
    pub asset_dirs_copied: usize,
    pub asset_files_copied: usize,
}

impl IndexingEngine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Rebuilds the full index from the content root and hands it to `sink`.
    ///
    /// Assets are copied while topics are resolved; the index files are only
    /// written once every topic has been processed, so any failure aborts
    /// the run before the previous index is replaced.
    pub fn run<S: PublishSink>(&self, sink: &mut S) -> Result<IndexingStats> {
        info!("Building content index...");

        let content = &self.config.content;
        let catalog = &self.config.catalog;

        let scanner = DirectoryScanner::from_config(content);
        let resolver = TopicResolver::new(catalog);

        let candidates = scanner.scan(&content.root)?;
        debug!("Found {} candidate topic directories", candidates.len());

        let mut stats = IndexingStats {
            directories_scanned: candidates.len(),
            ..Default::default()
        };
        let mut index = ContentIndex::default();

        for dir in &candidates {
            let source = TopicSource::load(dir, content, catalog)?;

            let Some(resolved) = resolver.resolve(&source) else {
                debug!("No recognized documents in {}, skipping", dir.slug);
                stats.directories_skipped += 1;
                continue;
            };

            if let Some(assets) = &source.assets {
                let copied = sink.copy_assets(&dir.slug, assets)?;
                stats.asset_dirs_copied += 1;
                stats.asset_files_copied += copied;
                info!("Copied assets for {}", dir.slug);
            }

            debug!(
                "Resolved topic {} ({} files)",
                resolved.topic.slug,
                resolved.topic.files.len()
            );
            index.topics.push(resolved.topic);
            index.search_entries.extend(resolved.search_entries);
        }

        stats.topics = index.topics.len();
        stats.search_entries = index.search_entries.len();

        sink.write_index(&index)?;

        info!(
            "Generated index for {} topics and {} search entries.",
            stats.topics, stats.search_entries
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::publish::MemorySink;
    use std::fs;
    use tempfile::TempDir;

    fn config_for(root: &std::path::Path) -> Config {
        let mut config = Config::default();
        config.content.root = root.to_path_buf();
        config
    }

    #[test]
    fn test_run_collects_topics_and_assets() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        let payments = root.join("payments-outage");
        fs::create_dir_all(payments.join("assets")).unwrap();
        fs::write(payments.join("README.md"), "# Payments Outage\nSummary text here.").unwrap();
        fs::write(payments.join("RUNBOOK.md"), "Steps...").unwrap();
        fs::write(payments.join("assets/diagram.png"), [0u8, 1, 2]).unwrap();

        fs::create_dir(root.join("scratch")).unwrap();
        fs::write(root.join("scratch/notes.md"), "not a key file").unwrap();

        let engine = IndexingEngine::new(config_for(root));
        let mut sink = MemorySink::default();
        let stats = engine.run(&mut sink).unwrap();

        assert_eq!(stats.directories_scanned, 2);
        assert_eq!(stats.directories_skipped, 1);
        assert_eq!(stats.topics, 1);
        assert_eq!(stats.search_entries, 2);
        assert_eq!(stats.asset_dirs_copied, 1);

        let index = sink.index.unwrap();
        assert_eq!(index.topics[0].slug, "payments-outage");
        assert_eq!(sink.copied_assets.len(), 1);
        assert_eq!(sink.copied_assets[0].0, "payments-outage");
        assert_eq!(sink.copied_assets[0].1, payments.join("assets"));
    }

    #[test]
    fn test_assets_of_skipped_topic_are_not_copied() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("images-only/assets")).unwrap();
        fs::write(temp_dir.path().join("images-only/assets/a.png"), "x").unwrap();

        let mut sink = MemorySink::default();
        let stats = IndexingEngine::new(config_for(temp_dir.path()))
            .run(&mut sink)
            .unwrap();

        assert_eq!(stats.topics, 0);
        assert!(sink.copied_assets.is_empty());
        assert_eq!(sink.index, Some(ContentIndex::default()));
    }

    #[test]
    fn test_malformed_front_matter_aborts_before_writing() {
        let temp_dir = TempDir::new().unwrap();
        let topic = temp_dir.path().join("broken");
        fs::create_dir(&topic).unwrap();
        fs::write(topic.join("README.md"), "---\ntitle: [oops\n---\n# Broken").unwrap();

        let mut sink = MemorySink::default();
        let result = IndexingEngine::new(config_for(temp_dir.path())).run(&mut sink);

        assert!(result.is_err());
        assert!(sink.index.is_none());
    }
}
