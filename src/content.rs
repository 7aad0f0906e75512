//! Lookup of a single topic document, the way the portal's category pages
//! load it: by topic slug and category slug.

use serde_yaml::Mapping;
use std::path::{Component, Path, PathBuf};

use crate::{
    config::Config,
    error::{IndexerError, Result},
    markdown::Document,
    models::Topic,
    utils::is_excluded_dir,
};

/// Category slug that addresses a topic's overview document.
pub const OVERVIEW_SLUG: &str = "readme";

#[derive(Debug, Clone, PartialEq)]
pub struct TopicContent {
    pub slug: String,
    pub title: String,
    pub path: PathBuf,
    pub content: String,
    pub front_matter: Mapping,
}

/// Reads the document of `slug` for `category` (`runbook`, `concept`, ...).
/// `None` or `readme` selects the overview document.
pub fn get_content(config: &Config, slug: &str, category: Option<&str>) -> Result<TopicContent> {
    validate_slug(config, slug)?;

    let filename = match category.map(str::to_lowercase) {
        None => config.content.overview_file.clone(),
        Some(category) if category == OVERVIEW_SLUG => config.content.overview_file.clone(),
        Some(category) => config
            .catalog
            .key_file_by_slug(&category)
            .map(|k| k.filename.clone())
            .ok_or_else(|| {
                IndexerError::invalid_input(format!("Unknown category: {category}"))
            })?,
    };

    let path = config.content.root.join(slug).join(&filename);
    if !path.is_file() {
        return Err(IndexerError::not_found(format!(
            "No {filename} for topic {slug}"
        )));
    }

    let raw = std::fs::read_to_string(&path)?;
    let document = Document::parse(&raw)?;
    let title = document
        .front_matter_title()
        .map(str::to_string)
        .unwrap_or_else(|| {
            filename
                .strip_suffix(".md")
                .unwrap_or(&filename)
                .to_string()
        });

    Ok(TopicContent {
        slug: slug.to_string(),
        title,
        path,
        content: document.body,
        front_matter: document.front_matter,
    })
}

/// Loads a published `topics.json`.
pub fn load_topics(path: &Path) -> Result<Vec<Topic>> {
    if !path.exists() {
        return Err(IndexerError::not_found(format!(
            "Topic index not found: {} (run the index command first)",
            path.display()
        )));
    }

    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

pub fn find_topic<'a>(topics: &'a [Topic], slug: &str) -> Option<&'a Topic> {
    topics.iter().find(|t| t.slug == slug)
}

fn validate_slug(config: &Config, slug: &str) -> Result<()> {
    let mut components = Path::new(slug).components();
    let single_segment = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !single_segment
        || is_excluded_dir(
            slug,
            &config.content.reserved_prefix,
            &config.content.ignored_dirs,
        )
    {
        return Err(IndexerError::invalid_input(format!(
            "Invalid topic slug: {slug}"
        )));
    }

    Ok(())
}
