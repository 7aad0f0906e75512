use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{IndexerError, Result};

/// Base name of the optional config file looked up in the working directory.
pub const DEFAULT_CONFIG_NAME: &str = "portal-indexer";

/// Prefix for environment overrides, e.g. `PORTAL_INDEXER_CONTENT__ROOT`.
pub const ENV_PREFIX: &str = "PORTAL_INDEXER";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub content: ContentConfig,
    pub output: OutputConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentConfig {
    pub root: PathBuf,
    pub overview_file: String,
    pub assets_dir_name: String,
    pub reserved_prefix: String,
    pub ignored_dirs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    pub data_dir: PathBuf,
    pub topics_file: String,
    pub search_index_file: String,
    pub assets_dir: PathBuf,
}

/// Category data handed to the resolver: which files are recognized, what
/// they are called and how they are ordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    pub route_prefix: String,
    pub overview_label: String,
    pub topic_label: String,
    pub key_files: Vec<KeyFile>,
    pub priority: Vec<String>,
    pub excerpt_length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyFile {
    pub filename: String,
    pub category: String,
}

impl KeyFile {
    pub fn new<F: Into<String>, C: Into<String>>(filename: F, category: C) -> Self {
        Self {
            filename: filename.into(),
            category: category.into(),
        }
    }

    /// Lowercased category, used as the last route segment.
    pub fn slug(&self) -> String {
        self.category.to_lowercase()
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            overview_file: "README.md".to_string(),
            assets_dir_name: "assets".to_string(),
            reserved_prefix: ".".to_string(),
            ignored_dirs: [
                "website",
                ".git",
                ".github",
                ".agent",
                ".gemini",
                "node_modules",
                "_templates",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("website/src/data"),
            topics_file: "topics.json".to_string(),
            search_index_file: "search-index.json".to_string(),
            assets_dir: PathBuf::from("website/public/images/topics"),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            route_prefix: "/topics".to_string(),
            overview_label: "Overview".to_string(),
            topic_label: "Topic".to_string(),
            key_files: vec![
                KeyFile::new("RUNBOOK.md", "Runbook"),
                KeyFile::new("WORKSHOP.md", "Workshop"),
                KeyFile::new("BUSINESS.md", "Business"),
                KeyFile::new("CONCEPT.md", "Concept"),
                KeyFile::new("CONTENT.md", "Content"),
            ],
            priority: ["Business", "Concept", "Runbook", "Workshop"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            excerpt_length: 150,
        }
    }
}

impl CatalogConfig {
    /// Route of a topic landing page.
    pub fn topic_route(&self, slug: &str) -> String {
        format!("{}/{slug}", self.route_prefix.trim_end_matches('/'))
    }

    /// Route of a categorized document inside a topic.
    pub fn document_route(&self, slug: &str, key_file: &KeyFile) -> String {
        format!("{}/{}", self.topic_route(slug), key_file.slug())
    }

    /// Position of a category in the priority list, if it is listed.
    pub fn priority_of(&self, category: &str) -> Option<usize> {
        self.priority.iter().position(|p| p == category)
    }

    /// Looks up a key file by its route slug (`runbook`, `concept`, ...).
    pub fn key_file_by_slug(&self, slug: &str) -> Option<&KeyFile> {
        let slug = slug.to_lowercase();
        self.key_files.iter().find(|k| k.slug() == slug)
    }
}

impl Config {
    /// Loads configuration from defaults, an optional config file and the
    /// environment, in increasing order of precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default())?;

        let mut builder = config::Config::builder().add_source(defaults);
        builder = match path {
            Some(path) => {
                if !path.exists() {
                    return Err(IndexerError::not_found(format!(
                        "Config file not found: {}",
                        path.display()
                    )));
                }
                builder.add_source(config::File::from(path).required(true))
            }
            None => builder.add_source(config::File::with_name(DEFAULT_CONFIG_NAME).required(false)),
        };
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Config = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let catalog = &self.catalog;

        if catalog.key_files.is_empty() {
            return Err(IndexerError::invalid_input(
                "At least one key file must be configured",
            ));
        }

        if catalog.excerpt_length == 0 {
            return Err(IndexerError::invalid_input(
                "Excerpt length must be greater than 0",
            ));
        }

        let mut filenames = HashSet::new();
        let mut categories = HashSet::new();
        for key_file in &catalog.key_files {
            if key_file.filename == self.content.overview_file {
                return Err(IndexerError::invalid_input(format!(
                    "Key file {} collides with the overview file",
                    key_file.filename
                )));
            }
            if !filenames.insert(key_file.filename.as_str()) {
                return Err(IndexerError::invalid_input(format!(
                    "Duplicate key file: {}",
                    key_file.filename
                )));
            }
            if !categories.insert(key_file.slug()) {
                return Err(IndexerError::invalid_input(format!(
                    "Duplicate category: {}",
                    key_file.category
                )));
            }
        }

        Ok(())
    }

    pub fn topics_path(&self) -> PathBuf {
        self.output.data_dir.join(&self.output.topics_file)
    }

    pub fn search_index_path(&self) -> PathBuf {
        self.output.data_dir.join(&self.output.search_index_file)
    }
}
