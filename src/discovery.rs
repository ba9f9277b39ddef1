//! Application discovery.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use walkdir::WalkDir;

use crate::config::SearchOptions;
use crate::error::{IndexError, Result};
use crate::os::OperatingSystemVersion;

/// Finds candidate application paths for the index.
///
/// Injected into the index as a capability so platform-specific strategies
/// and test doubles stay outside the refresh protocol. A failure here aborts
/// the refresh before any record is built.
#[async_trait]
pub trait Discoverer: Send + Sync {
    async fn search(
        &self,
        options: &SearchOptions,
        os_version: &OperatingSystemVersion,
    ) -> Result<Vec<PathBuf>>;
}

pub type SharedDiscoverer = Arc<dyn Discoverer>;

/// Scans the configured application folders for entries whose extension
/// matches the configured set.
///
/// Bundle-style applications (macOS `.app`) are directories; a matching
/// directory is collected without descending into it. Folders that do not
/// exist are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemDiscoverer;

#[async_trait]
impl Discoverer for FileSystemDiscoverer {
    async fn search(
        &self,
        options: &SearchOptions,
        _os_version: &OperatingSystemVersion,
    ) -> Result<Vec<PathBuf>> {
        let folders = options.application_folders.clone();
        let extensions: Vec<String> = options
            .application_file_extensions
            .iter()
            .map(|extension| extension.trim_start_matches('.').to_ascii_lowercase())
            .collect();

        tokio::task::spawn_blocking(move || scan_folders(&folders, &extensions))
            .await
            .map_err(|error| IndexError::Discovery(format!("scan task failed: {error}")))?
    }
}

fn scan_folders(folders: &[PathBuf], extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for folder in folders {
        if !folder.is_dir() {
            log::debug!("skipping missing application folder {}", folder.display());
            continue;
        }
        let mut walker = WalkDir::new(folder).follow_links(true).into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry.map_err(|error| {
                IndexError::Discovery(format!("failed to walk {}: {error}", folder.display()))
            })?;
            if entry.depth() == 0 {
                continue;
            }
            if matches_extension(entry.path(), extensions) {
                paths.push(entry.path().to_path_buf());
                if entry.file_type().is_dir() {
                    walker.skip_current_dir();
                }
            }
        }
    }
    Ok(paths)
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| {
            let extension = extension.to_ascii_lowercase();
            extensions.iter().any(|candidate| candidate == &extension)
        })
        .unwrap_or(false)
}
