//! Error types for tree generation
//!
//! Only two conditions abort a run: a root directory that does not exist and
//! an invalid exclusion pattern. Everything that goes wrong below the root
//! (permission failures, unreadable metadata, symlink loops) is recovered
//! locally and surfaced as an annotated line in the tree output instead.

use std::path::PathBuf;
use thiserror::Error;

/// Errors reported to the caller as whole-operation failures.
#[derive(Error, Debug)]
pub enum TreeError {
    #[error("directory does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("exclusion pattern '{0}' contains path separators or glob metacharacters")]
    InvalidExclusion(String),

    #[error("failed to write report to '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, TreeError>;
