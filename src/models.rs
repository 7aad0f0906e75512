use serde::{Deserialize, Serialize};

/// One top-level content directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub slug: String,
    pub title: String,
    pub summary: String,
    pub files: Vec<FileRef>,
}

/// A recognized document inside a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    #[serde(rename = "type")]
    pub file_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub path: String,
}

/// Flattened per-document record consumed by the search widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    pub title: String,
    pub slug: String,
    pub path: String,
    pub category: String,
    pub keywords: String,
    pub excerpt: String,
}

/// Everything a single indexing run produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentIndex {
    pub topics: Vec<Topic>,
    pub search_entries: Vec<SearchEntry>,
}

impl FileRef {
    pub fn overview<L: Into<String>, P: Into<String>>(label: L, path: P) -> Self {
        Self {
            file_type: label.into(),
            filename: None,
            slug: None,
            path: path.into(),
        }
    }

    pub fn is_overview(&self) -> bool {
        self.filename.is_none()
    }
}
