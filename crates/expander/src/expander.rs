use std::path::Path;

use crate::fs::{Filesystem, OsFilesystem};
use crate::native;
use crate::normalize::{absolutize, normalize, split_root};

/// Marker character that flags a component as a candidate 8.3 short name.
///
/// Short names are not guaranteed to contain it, but its absence is a
/// reliable negative signal worth skipping work for.
pub const SHORT_NAME_MARKER: char = '~';

/// Expands Windows 8.3 short-name path components to their long form.
///
/// The operation never fails: components that cannot be resolved stay short,
/// and the worst case is the normalized input returned unchanged.
pub struct ShortPathExpander<F = OsFilesystem> {
    fs: F,
}

impl ShortPathExpander<OsFilesystem> {
    pub fn new() -> Self {
        Self { fs: OsFilesystem }
    }
}

impl Default for ShortPathExpander<OsFilesystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Filesystem> ShortPathExpander<F> {
    /// Expander over a custom filesystem collaborator.
    pub fn with_filesystem(fs: F) -> Self {
        Self { fs }
    }

    /// Resolves `path` to its normalized absolute form with every resolvable
    /// short component expanded. Best-effort on Windows, a plain
    /// normalization everywhere else.
    pub async fn expand(&self, path: &str) -> String {
        let normalized = absolutize(path);
        if !cfg!(windows) {
            // Short names are a Windows-only concept.
            return normalized;
        }
        if !normalized.contains(SHORT_NAME_MARKER) {
            log::debug!("no short-name marker in {normalized}, skipping expansion");
            return normalized;
        }

        let expanded = self.expand_components(&normalized).await;
        if expanded.contains(SHORT_NAME_MARKER) {
            match native::long_path_name(&expanded).await {
                Ok(resolved) => return normalize(&resolved),
                Err(err) => {
                    log::debug!("native long-path fallback failed for {expanded}: {err}");
                }
            }
        }
        expanded
    }

    /// Top-down component walk. The parent is expanded before the component
    /// is looked up, because the lookup scans the parent's expanded listing.
    pub(crate) async fn expand_components(&self, normalized: &str) -> String {
        let (root, rest) = split_root(normalized);
        let mut expanded = String::from(root);
        for component in rest.split('/').filter(|c| !c.is_empty()) {
            let parent = if expanded.is_empty() {
                String::from(".")
            } else {
                expanded.clone()
            };
            if !expanded.is_empty() && !expanded.ends_with('/') {
                expanded.push('/');
            }
            if !component.contains(SHORT_NAME_MARKER) {
                expanded.push_str(component);
                continue;
            }
            match self.long_name_of(Path::new(&parent), component).await {
                Some(long_name) => expanded.push_str(&long_name),
                None => expanded.push_str(component),
            }
        }
        expanded
    }

    /// Finds the long form of `short_name` by identity-matching the parent's
    /// listing. `None` means the component has to stay short.
    async fn long_name_of(&self, parent: &Path, short_name: &str) -> Option<String> {
        let target = match self.fs.entry_identity(&parent.join(short_name)).await {
            Ok(identity) => identity,
            Err(err) => {
                log::debug!("stat failed for {short_name} in {}: {err}", parent.display());
                return None;
            }
        };
        if target.is_unavailable() {
            log::debug!(
                "no identity for {short_name} in {}, leaving it short",
                parent.display()
            );
            return None;
        }

        let entries = match self.fs.list_dir(parent).await {
            Ok(entries) => entries,
            Err(err) => {
                log::debug!("cannot list {}: {err}", parent.display());
                return None;
            }
        };
        for entry in entries {
            // A single bad entry must not abort the scan.
            let Ok(identity) = self.fs.entry_identity(&parent.join(&entry)).await else {
                continue;
            };
            if identity.matches(target) {
                return Some(entry);
            }
        }
        None
    }
}
