use async_trait::async_trait;
use std::path::Path;

use crate::error::Result;
use crate::identity::EntryIdentity;

/// Filesystem collaborator for expansion: a link-aware stat and a directory
/// listing. Symbolic links are inspected, never followed: expansion operates
/// on the link entry itself.
#[async_trait]
pub trait Filesystem: Send + Sync {
    /// Identity of the entry at `path`, without following symlinks.
    async fn entry_identity(&self, path: &Path) -> Result<EntryIdentity>;

    /// Child entry names of the directory at `path`.
    async fn list_dir(&self, path: &Path) -> Result<Vec<String>>;
}

/// Production filesystem backed by tokio's async fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFilesystem;

#[async_trait]
impl Filesystem for OsFilesystem {
    async fn entry_identity(&self, path: &Path) -> Result<EntryIdentity> {
        let meta = tokio::fs::symlink_metadata(path).await?;
        Ok(EntryIdentity::from_metadata(&meta))
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let mut dir = tokio::fs::read_dir(path).await?;
        let mut names = Vec::new();
        while let Some(entry) = dir.next_entry().await? {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}
