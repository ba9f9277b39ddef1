//! Generated-icon storage and the enrichment adapter seam.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::error::{IndexError, Result};
use crate::types::Application;

/// Produces icon assets for a batch of applications.
///
/// Implementations render or extract icons into the shared [`DiskIconStore`]
/// location; the index rewrites records to point at the derived paths once
/// the whole batch succeeded. Any error aborts the refresh with no partial
/// rewrite.
#[async_trait]
pub trait IconGenerator: Send + Sync {
    /// Generate an icon asset for every application in the batch.
    async fn generate_icons(&self, applications: &[Application]) -> Result<()>;

    /// Invalidate previously generated icon assets. Independent of any
    /// in-flight refresh; a later refresh regenerates them.
    async fn clear_cache(&self) -> Result<()>;
}

pub type SharedIconGenerator = Arc<dyn IconGenerator>;

/// Owns the directory generated icon assets are written to, and the
/// deterministic mapping from an application path to its asset path.
///
/// The index and the enrichment adapter must share one store value so both
/// sides derive the same asset paths.
#[derive(Debug, Clone)]
pub struct DiskIconStore {
    directory: PathBuf,
}

impl DiskIconStore {
    pub fn new(directory: PathBuf) -> Self {
        Self { directory }
    }

    /// Store under the user cache directory.
    pub fn default_location() -> Result<Self> {
        let base = dirs::cache_dir()
            .ok_or_else(|| IndexError::IconCache("no user cache directory".to_string()))?;
        Ok(Self::new(base.join("app-index").join("icons")))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Asset path for an application, a pure function of its file path.
    pub fn icon_file_path(&self, application_file_path: &Path) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(application_file_path.to_string_lossy().as_bytes());
        let hash = hex::encode(hasher.finalize());
        self.directory.join(format!("{hash}.png"))
    }

    /// Create the store directory if it does not exist yet.
    pub async fn ensure_directory(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.directory)
            .await
            .map_err(|error| {
                IndexError::IconCache(format!(
                    "failed to create icon directory {}: {error}",
                    self.directory.display()
                ))
            })
    }

    /// Remove every generated asset, leaving an empty store directory.
    pub async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_dir_all(&self.directory).await {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                return Err(IndexError::IconCache(format!(
                    "failed to clear icon directory {}: {error}",
                    self.directory.display()
                )))
            }
        }
        self.ensure_directory().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn derivation_is_deterministic_and_collision_free_per_path() {
        let store = DiskIconStore::new(PathBuf::from("/tmp/icons"));
        let first = store.icon_file_path(Path::new("/Applications/Safari.app"));
        let second = store.icon_file_path(Path::new("/Applications/Safari.app"));
        let other = store.icon_file_path(Path::new("/Applications/Mail.app"));

        assert_eq!(first, second);
        assert_ne!(first, other);
        assert!(first.starts_with("/tmp/icons"));
        assert_eq!(first.extension().and_then(|e| e.to_str()), Some("png"));
    }

    #[tokio::test]
    async fn clear_empties_the_store_directory() {
        let dir = tempdir().expect("tempdir");
        let store = DiskIconStore::new(dir.path().join("icons"));
        store.ensure_directory().await.expect("ensure");
        let asset = store.icon_file_path(Path::new("/Applications/Safari.app"));
        tokio::fs::write(&asset, b"png").await.expect("write asset");

        store.clear().await.expect("clear");

        assert!(!asset.exists());
        assert!(store.directory().is_dir());
    }

    #[tokio::test]
    async fn clear_on_a_missing_directory_recreates_it() {
        let dir = tempdir().expect("tempdir");
        let store = DiskIconStore::new(dir.path().join("never-created"));

        store.clear().await.expect("clear");

        assert!(store.directory().is_dir());
    }
}
