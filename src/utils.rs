use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

use crate::error::{IndexerError, Result};

/// Convert a path to an absolute path
pub fn to_absolute_path<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let path = path.as_ref();
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        std::env::current_dir()
            .map_err(IndexerError::from)
            .map(|cwd| cwd.join(path))
    }
}

/// Calculate SHA256 hash of file content
pub fn calculate_file_hash<P: AsRef<Path>>(path: P) -> Result<String> {
    let content = std::fs::read(path)?;
    let hash = Sha256::digest(&content);
    Ok(format!("{:x}", hash))
}

/// Turn a directory slug into a display title: `incident-response` becomes
/// `Incident Response`. Only the first letter of each word changes case.
pub fn humanize_slug(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Check if a top-level directory name is excluded from topic discovery
pub fn is_excluded_dir(name: &str, reserved_prefix: &str, ignored_dirs: &[String]) -> bool {
    if !reserved_prefix.is_empty() && name.starts_with(reserved_prefix) {
        return true;
    }

    ignored_dirs.iter().any(|ignored| ignored == name)
}
