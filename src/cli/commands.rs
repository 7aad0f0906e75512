use log::info;
use serde::Serialize;

use crate::content::{find_topic, get_content, load_topics};
use crate::indexing::{IndexingEngine, IndexingStats};
use crate::models::Topic;
use crate::publish::FsPublishSink;
use crate::search::{SearchEngine, SearchQuery};
use crate::utils::{calculate_file_hash, to_absolute_path};
use crate::{Config, IndexerError, Result};

pub fn index(config: Config) -> Result<IndexingStats> {
    index_internal(config, true)
}

pub fn index_internal(config: Config, output_to_console: bool) -> Result<IndexingStats> {
    let root = to_absolute_path(&config.content.root)?;
    info!("Indexing content root: {root:?}");

    let mut sink = FsPublishSink::new(&config);
    let engine = IndexingEngine::new(config);
    let stats = engine.run(&mut sink)?;

    if output_to_console {
        println!("Indexing completed!");
        println!("  Directories scanned: {}", stats.directories_scanned);
        println!("  Topics: {}", stats.topics);
        println!("  Search entries: {}", stats.search_entries);
        println!("  Asset directories copied: {}", stats.asset_dirs_copied);
        println!("  Asset files copied: {}", stats.asset_files_copied);
    }

    Ok(stats)
}

pub fn search(config: &Config, query: String, limit: Option<usize>) -> Result<()> {
    search_internal(config, query, limit, true).map(|_| ())
}

/// Returns the paths of the matching entries.
pub fn search_internal(
    config: &Config,
    query: String,
    limit: Option<usize>,
    output_to_console: bool,
) -> Result<Vec<String>> {
    info!("Searching for: '{query}', limit: {limit:?}");

    let mut search_query = SearchQuery::new(query.clone());
    if let Some(limit) = limit {
        search_query = search_query.with_limit(limit);
    }
    SearchEngine::validate_query(&search_query)?;

    let engine = SearchEngine::load(&config.search_index_path())?;
    let results = engine.search(&search_query)?;

    if output_to_console {
        if results.is_empty() {
            println!("No results found for query: '{query}'");
        } else {
            println!("Found {} results for '{query}':", results.len());
            for (i, entry) in results.iter().enumerate() {
                println!("  {}. {} [{}]", i + 1, entry.title, entry.category);
                println!("     {}", entry.path);
                if !entry.excerpt.is_empty() {
                    println!("     {}", entry.excerpt);
                }
            }
        }
    }

    Ok(results.into_iter().map(|e| e.path.clone()).collect())
}

pub fn get(config: &Config, slug: String, category: Option<String>) -> Result<()> {
    get_internal(config, slug, category, true).map(|_| ())
}

pub fn get_internal(
    config: &Config,
    slug: String,
    category: Option<String>,
    output_to_console: bool,
) -> Result<String> {
    info!("Getting content for topic {slug}, category: {category:?}");

    let content = get_content(config, &slug, category.as_deref())?;

    if output_to_console {
        println!("{}", content.title);
        println!();
        println!("{}", content.content);
    }

    Ok(content.content)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexStatus {
    pub topics: usize,
    pub search_entries: usize,
    pub topics_file: String,
    pub topics_sha256: String,
    pub search_index_file: String,
    pub search_index_sha256: String,
}

pub fn status(config: &Config, format: String) -> Result<()> {
    status_internal(config, format, true).map(|_| ())
}

pub fn status_internal(
    config: &Config,
    format: String,
    output_to_console: bool,
) -> Result<IndexStatus> {
    if format != "text" && format != "json" {
        return Err(IndexerError::invalid_input(format!(
            "Unsupported format: {format} (expected text or json)"
        )));
    }

    let topics_path = config.topics_path();
    let search_index_path = config.search_index_path();

    let topics = load_topics(&topics_path)?;
    let search_engine = SearchEngine::load(&search_index_path)?;

    let status = IndexStatus {
        topics: topics.len(),
        search_entries: search_engine.len(),
        topics_file: topics_path.display().to_string(),
        topics_sha256: calculate_file_hash(&topics_path)?,
        search_index_file: search_index_path.display().to_string(),
        search_index_sha256: calculate_file_hash(&search_index_path)?,
    };

    if output_to_console {
        if format == "json" {
            println!("{}", serde_json::to_string_pretty(&status)?);
        } else {
            println!("Content Index Status:");
            println!("  Topics: {}", status.topics);
            println!("  Search entries: {}", status.search_entries);
            println!("  {} ({})", status.topics_file, status.topics_sha256);
            println!(
                "  {} ({})",
                status.search_index_file, status.search_index_sha256
            );
            for topic in &topics {
                let modules = topic.files.iter().filter(|f| !f.is_overview()).count();
                println!("    {} - {} ({modules} modules)", topic.slug, topic.title);
            }
        }
    }

    Ok(status)
}

pub fn show_topic(config: &Config, slug: &str) -> Result<()> {
    show_topic_internal(config, slug, true).map(|_| ())
}

/// Looks a topic up in the published `topics.json`.
pub fn show_topic_internal(
    config: &Config,
    slug: &str,
    output_to_console: bool,
) -> Result<Topic> {
    info!("Showing topic {slug}");

    let topics = load_topics(&config.topics_path())?;
    let topic = find_topic(&topics, slug)
        .cloned()
        .ok_or_else(|| IndexerError::not_found(format!("Topic not in index: {slug}")))?;

    if output_to_console {
        println!("{}", topic.title);
        if !topic.summary.is_empty() {
            println!("  {}", topic.summary);
        }
        for file in &topic.files {
            println!("  {:<10} {}", file.file_type, file.path);
        }
    }

    Ok(topic)
}
