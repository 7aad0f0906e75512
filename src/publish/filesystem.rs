use log::{debug, warn};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

use crate::{
    config::Config,
    error::{IndexerError, Result},
    models::ContentIndex,
    publish::sink::PublishSink,
};

/// Publishes the index as pretty-printed JSON files and copies assets into
/// the static site tree. Every file is written to a temporary sibling and
/// renamed into place.
#[derive(Debug, Clone)]
pub struct FsPublishSink {
    topics_path: PathBuf,
    search_index_path: PathBuf,
    assets_dir: PathBuf,
    assets_dir_name: String,
}

impl FsPublishSink {
    pub fn new(config: &Config) -> Self {
        Self {
            topics_path: config.topics_path(),
            search_index_path: config.search_index_path(),
            assets_dir: config.output.assets_dir.clone(),
            assets_dir_name: config.content.assets_dir_name.clone(),
        }
    }

    /// Where the assets of `slug` end up, e.g. `public/images/topics/dns/assets`.
    pub fn asset_destination(&self, slug: &str) -> PathBuf {
        self.assets_dir.join(slug).join(&self.assets_dir_name)
    }
}

impl PublishSink for FsPublishSink {
    fn write_index(&mut self, index: &ContentIndex) -> Result<()> {
        write_json_atomic(&self.topics_path, &index.topics)?;
        write_json_atomic(&self.search_index_path, &index.search_entries)?;
        Ok(())
    }

    fn copy_assets(&mut self, slug: &str, source: &Path) -> Result<usize> {
        let destination = self.asset_destination(slug);
        fs::create_dir_all(&destination)?;

        let mut copied = 0;
        for entry in WalkDir::new(source).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) if is_dangling_link(&err) => {
                    warn!("Skipping dangling asset link: {:?}", err.path());
                    continue;
                }
                Err(err) => return Err(err.into()),
            };
            let relative = entry.path().strip_prefix(source).map_err(|e| {
                IndexerError::file_processing(format!(
                    "Asset {} is outside {}: {e}",
                    entry.path().display(),
                    source.display()
                ))
            })?;
            let target = destination.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                copy_file_atomic(entry.path(), &target)?;
                copied += 1;
            }
        }

        debug!("Copied {copied} asset files to {destination:?}");
        Ok(copied)
    }
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.path()
        .is_some_and(|path| path.is_symlink() && !path.exists())
}

fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;

    let mut file = temp_sibling(path)?;
    file.write_all(json.as_bytes())?;
    file.as_file().sync_all()?;
    set_published_permissions(file.as_file())?;
    file.persist(path)?;

    debug!("Wrote {path:?}");
    Ok(())
}

fn copy_file_atomic(source: &Path, target: &Path) -> Result<()> {
    let mut reader = File::open(source).map_err(|e| {
        IndexerError::file_processing(format!("Failed to read asset {}: {e}", source.display()))
    })?;

    let mut file = temp_sibling(target)?;
    io::copy(&mut reader, file.as_file_mut())?;
    file.as_file()
        .set_permissions(fs::metadata(source)?.permissions())?;
    file.persist(target)?;
    Ok(())
}

/// Temporary file in the target's directory, creating that directory first.
fn temp_sibling(path: &Path) -> Result<NamedTempFile> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    Ok(NamedTempFile::new_in(parent)?)
}

#[cfg(unix)]
fn set_published_permissions(file: &File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_published_permissions(_file: &File) -> io::Result<()> {
    Ok(())
}
