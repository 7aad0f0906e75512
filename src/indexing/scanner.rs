use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::{
    config::ContentConfig,
    error::{IndexerError, Result},
    utils::is_excluded_dir,
};

/// A candidate topic directory directly under the content root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDir {
    pub slug: String,
    pub path: PathBuf,
}

pub struct DirectoryScanner {
    reserved_prefix: String,
    ignored_dirs: Vec<String>,
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::from_config(&ContentConfig::default())
    }
}

impl DirectoryScanner {
    pub fn new(reserved_prefix: String, ignored_dirs: Vec<String>) -> Self {
        Self {
            reserved_prefix,
            ignored_dirs,
        }
    }

    pub fn from_config(config: &ContentConfig) -> Self {
        Self::new(config.reserved_prefix.clone(), config.ignored_dirs.clone())
    }

    /// Lists the immediate subdirectories of `root` that may hold topics,
    /// sorted by name.
    pub fn scan(&self, root: &Path) -> Result<Vec<TopicDir>> {
        if !root.exists() {
            return Err(IndexerError::not_found(format!(
                "Content root not found: {}",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(IndexerError::invalid_input(format!(
                "Content root is not a directory: {}",
                root.display()
            )));
        }

        let mut topics = Vec::new();

        for entry in WalkDir::new(root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name()
        {
            let entry = entry?;

            // Symlinked directories are not followed
            if !entry.file_type().is_dir() {
                continue;
            }

            let Some(name) = entry.file_name().to_str() else {
                warn!("Skipping directory with non UTF-8 name: {:?}", entry.path());
                continue;
            };

            if is_excluded_dir(name, &self.reserved_prefix, &self.ignored_dirs) {
                debug!("Skipping excluded directory: {name}");
                continue;
            }

            topics.push(TopicDir {
                slug: name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }

        Ok(topics)
    }
}
