//! In-memory VFS implementation.
//!
//! Backs unit tests and embedded theme bundles. The tree is a
//! `BTreeMap<String, Vec<u8>>` keyed by normalized absolute paths; there is
//! no directory bookkeeping because resolution only ever probes files.

use std::collections::BTreeMap;

use veneer_types::error::{Result, VeneerError};

use crate::{Vfs, normalize};

/// A fully in-memory, read-only-through-the-trait file tree.
#[derive(Debug, Default)]
pub struct MemoryVfs {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemoryVfs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a file, replacing any previous contents at that path.
    ///
    /// Population happens before the tree is handed to the engine; the `Vfs`
    /// trait itself exposes no mutation.
    pub fn add_file(&mut self, path: &str, data: impl Into<Vec<u8>>) -> &mut Self {
        self.files.insert(normalize(path).into_owned(), data.into());
        self
    }

    /// Insert an empty marker file. Existence is all resolution checks, so
    /// tests rarely need real bytes.
    pub fn touch(&mut self, path: &str) -> &mut Self {
        self.add_file(path, Vec::new())
    }

    /// Number of files in the tree.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Vfs for MemoryVfs {
    fn exists(&self, path: &str) -> bool {
        self.files.contains_key(normalize(path).as_ref())
    }

    fn read(&self, path: &str) -> Result<Vec<u8>> {
        let path = normalize(path);
        self.files
            .get(path.as_ref())
            .cloned()
            .ok_or_else(|| VeneerError::Vfs(format!("no such file: {path}")))
    }
}
