use log::debug;
use std::path::Path;

use crate::{
    error::{IndexerError, Result},
    models::SearchEntry,
};

/// Number of results the portal's search box shows.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

/// Case-insensitive substring filter over a published search index.
pub struct SearchEngine {
    entries: Vec<SearchEntry>,
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub limit: usize,
}

impl SearchQuery {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_RESULT_LIMIT,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

impl SearchEngine {
    pub fn new(entries: Vec<SearchEntry>) -> Self {
        Self { entries }
    }

    /// Loads a `search-index.json` written by the indexer.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(IndexerError::not_found(format!(
                "Search index not found: {} (run the index command first)",
                path.display()
            )));
        }

        let json = std::fs::read_to_string(path)?;
        let entries: Vec<SearchEntry> = serde_json::from_str(&json)?;
        debug!("Loaded {} search entries from {path:?}", entries.len());
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate_query(query: &SearchQuery) -> Result<()> {
        if query.text.is_empty() {
            return Err(IndexerError::invalid_input("Search query cannot be empty"));
        }

        if query.limit == 0 {
            return Err(IndexerError::invalid_input(
                "Search limit must be greater than 0",
            ));
        }

        Ok(())
    }

    /// Entries whose title or keywords contain the query, in index order.
    pub fn search(&self, query: &SearchQuery) -> Result<Vec<&SearchEntry>> {
        Self::validate_query(query)?;

        let needle = query.text.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.keywords.to_lowercase().contains(&needle)
            })
            .take(query.limit)
            .collect())
    }
}
