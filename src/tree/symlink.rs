//! Symlink cycle detection
//!
//! `SymlinkGuard` owns the set of canonicalized directory paths already
//! visited in the current walk. A path is added before its children are
//! visited and never removed, which turns a potential infinite symlink cycle
//! into a bounded number of line emissions: the walk visits at most as many
//! distinct resolved directories as exist on the filesystem.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// How the walker should treat a directory entry with respect to symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkStatus {
    /// Plain directory, descend after marking visited
    NotSymlink,
    /// Symlink whose resolved target was already visited this walk
    Cycle { target: PathBuf },
    /// Symlink reported but not followed (`follow_symlinks` is off)
    Skipped { target: PathBuf },
    /// Symlink to descend into as if it were a plain directory
    Follow { target: PathBuf },
}

/// Visit-once bookkeeping for one traversal. Created fresh per walk.
#[derive(Debug)]
pub struct SymlinkGuard {
    visited: HashSet<PathBuf>,
    follow_symlinks: bool,
}

impl SymlinkGuard {
    pub fn new(follow_symlinks: bool) -> Self {
        Self {
            visited: HashSet::new(),
            follow_symlinks,
        }
    }

    /// Classify a directory entry. Cycle detection runs before the follow
    /// policy so loops are reported in both follow modes.
    pub fn classify(&self, path: &Path) -> LinkStatus {
        if !path.is_symlink() {
            return LinkStatus::NotSymlink;
        }

        let target = resolve(path);
        if self.visited.contains(&target) {
            LinkStatus::Cycle { target }
        } else if !self.follow_symlinks {
            LinkStatus::Skipped { target }
        } else {
            LinkStatus::Follow { target }
        }
    }

    /// Add a directory's resolved path to the visited set. Returns false if
    /// it was already present.
    pub fn mark_visited(&mut self, path: &Path) -> bool {
        self.visited.insert(resolve(path))
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }
}

/// Canonicalize, falling back to the raw path when resolution fails
/// (e.g. a broken link). The fallback still participates in the visited set,
/// so the termination guarantee holds either way.
fn resolve(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
