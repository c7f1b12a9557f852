//! Read-only virtual file system seam.
//!
//! Asset resolution only ever needs two operations from storage: an existence
//! probe and a bulk read. Keeping that surface behind a trait lets the engine
//! run against a real theme directory (`DiskVfs`) or a fully in-memory tree
//! (`MemoryVfs`) in tests. The engine never writes.

use std::borrow::Cow;

use veneer_types::error::Result;

mod disk;
mod memory;

pub use disk::DiskVfs;
pub use memory::MemoryVfs;

/// Storage operations the resolution engine depends on.
///
/// `exists` is treated as a fast local call; resolution probes candidates
/// with it and only `read`s the winner.
pub trait Vfs {
    /// Whether a file exists at `path` (root-relative, `/`-separated).
    fn exists(&self, path: &str) -> bool;

    /// Read the full contents of the file at `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Canonical form: exactly one leading `/`, single separators between
/// segments, no trailing separator (root stays `/`).
fn is_canonical(path: &str) -> bool {
    path.starts_with('/')
        && !path.contains("//")
        && (path.len() == 1 || !path.ends_with('/'))
}

/// Put a path into the canonical form both VFS implementations key on, so
/// `exists("overlays//snes.png/")` and `exists("/overlays/snes.png")` probe
/// the same file. Canonical input is passed through without allocating.
pub fn normalize(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }
    let mut out = String::with_capacity(path.len() + 1);
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        out.push_str(segment);
    }
    if out.is_empty() {
        out.push('/');
    }
    Cow::Owned(out)
}
