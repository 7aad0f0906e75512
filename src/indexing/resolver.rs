use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    config::{CatalogConfig, ContentConfig, KeyFile},
    error::{IndexerError, Result},
    indexing::scanner::TopicDir,
    markdown::Document,
    models::{FileRef, SearchEntry, Topic},
    utils::humanize_slug,
};

/// The parsed documents of one topic directory.
#[derive(Debug, Clone, Default)]
pub struct TopicSource {
    pub slug: String,
    pub overview: Option<Document>,
    /// Key documents present on disk, in catalog order.
    pub documents: Vec<(KeyFile, Document)>,
    pub assets: Option<PathBuf>,
}

/// A topic together with its search entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTopic {
    pub topic: Topic,
    pub search_entries: Vec<SearchEntry>,
}

impl TopicSource {
    /// Reads the overview and every recognized key file that exists in the
    /// topic directory.
    pub fn load(dir: &TopicDir, content: &ContentConfig, catalog: &CatalogConfig) -> Result<Self> {
        let overview = read_document(&dir.path.join(&content.overview_file))?;

        let mut documents = Vec::new();
        for key_file in &catalog.key_files {
            if let Some(document) = read_document(&dir.path.join(&key_file.filename))? {
                documents.push((key_file.clone(), document));
            }
        }

        let assets_path = dir.path.join(&content.assets_dir_name);
        let assets = assets_path.is_dir().then_some(assets_path);

        Ok(Self {
            slug: dir.slug.clone(),
            overview,
            documents,
            assets,
        })
    }

    pub fn has_documents(&self) -> bool {
        self.overview.is_some() || !self.documents.is_empty()
    }
}

fn read_document(path: &Path) -> Result<Option<Document>> {
    if !path.is_file() {
        return Ok(None);
    }

    debug!("Reading document: {path:?}");
    let raw = std::fs::read_to_string(path).map_err(|e| {
        IndexerError::file_processing(format!("Failed to read file {}: {e}", path.display()))
    })?;

    let document = Document::parse(&raw).map_err(|e| {
        IndexerError::file_processing(format!("Failed to parse {}: {e}", path.display()))
    })?;

    Ok(Some(document))
}

/// Derives topics and search entries from parsed documents. Holds no
/// filesystem state.
pub struct TopicResolver<'a> {
    catalog: &'a CatalogConfig,
}

impl<'a> TopicResolver<'a> {
    pub fn new(catalog: &'a CatalogConfig) -> Self {
        Self { catalog }
    }

    /// Returns `None` when the topic has no recognized document.
    pub fn resolve(&self, source: &TopicSource) -> Option<ResolvedTopic> {
        if !source.has_documents() {
            return None;
        }

        let slug = source.slug.as_str();
        let excerpt_length = self.catalog.excerpt_length;
        let topic_route = self.catalog.topic_route(slug);

        let mut title = humanize_slug(slug);
        let mut summary = String::new();
        let mut overview_ref = None;
        let mut search_entries = Vec::new();

        if let Some(overview) = &source.overview {
            if let Some(heading) = overview.heading() {
                title = heading;
            }
            summary = overview.summary(excerpt_length);

            overview_ref = Some(FileRef::overview(
                self.catalog.overview_label.as_str(),
                topic_route.as_str(),
            ));
            search_entries.push(SearchEntry {
                title: title.clone(),
                slug: slug.to_string(),
                path: topic_route.clone(),
                category: self.catalog.topic_label.clone(),
                keywords: slug.to_string(),
                excerpt: summary.clone(),
            });
        }

        let mut files = Vec::with_capacity(source.documents.len());
        for (key_file, document) in &source.documents {
            let path = self.catalog.document_route(slug, key_file);

            files.push(FileRef {
                file_type: key_file.category.clone(),
                filename: Some(key_file.filename.clone()),
                slug: Some(key_file.slug()),
                path: path.clone(),
            });
            search_entries.push(SearchEntry {
                title: format!("{title} - {}", key_file.category),
                slug: slug.to_string(),
                path,
                category: key_file.category.clone(),
                keywords: format!("{slug} {}", key_file.category),
                excerpt: document.excerpt(excerpt_length),
            });
        }

        self.sort_files(&mut files);
        if let Some(overview_ref) = overview_ref {
            files.insert(0, overview_ref);
        }

        Some(ResolvedTopic {
            topic: Topic {
                slug: slug.to_string(),
                title,
                summary,
                files,
            },
            search_entries,
        })
    }

    /// Stable sort by position in the priority list; unlisted categories go
    /// last in their original order.
    pub fn sort_files(&self, files: &mut [FileRef]) {
        files.sort_by_key(|file| {
            self.catalog
                .priority_of(&file.file_type)
                .unwrap_or(usize::MAX)
        });
    }
}
