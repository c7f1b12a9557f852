//! Disk-backed VFS implementation.
//!
//! Anchors all virtual paths under a single on-disk directory. Paths that try
//! to climb out of the root with `..` components never resolve.

use std::path::{Component, Path, PathBuf};

use veneer_types::error::{Result, VeneerError};

use crate::{Vfs, normalize};

/// A read-only view of a real directory tree.
#[derive(Debug, Clone)]
pub struct DiskVfs {
    root: PathBuf,
}

impl DiskVfs {
    /// Create a VFS rooted at `root`. The directory does not have to exist
    /// yet; probes against a missing root simply report absence.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a virtual path onto the disk, refusing traversal components.
    fn on_disk(&self, path: &str) -> Option<PathBuf> {
        let normalized = normalize(path);
        let relative = normalized.trim_start_matches('/');
        let candidate = Path::new(relative);
        for component in candidate.components() {
            match component {
                Component::Normal(_) => {},
                // `.`/`..`/prefixes would escape or alias the root.
                _ => return None,
            }
        }
        Some(self.root.join(candidate))
    }
}

impl Vfs for DiskVfs {
    fn exists(&self, path: &str) -> bool {
        self.on_disk(path).is_some_and(|p| p.is_file())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let on_disk = self
            .on_disk(path)
            .ok_or_else(|| VeneerError::Vfs(format!("invalid path: {path}")))?;
        std::fs::read(&on_disk).map_err(VeneerError::Io)
    }
}
