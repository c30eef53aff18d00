//! Canopy - directory tree reports with aggregate statistics

pub mod error;
pub mod output;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use output::{ConsolePrinter, render_html, render_text};
pub use stats::{StatsCollector, Summary, format_size};
pub use tree::{LineKind, SymlinkGuard, TreeLine, TreeOptions, TreeReport, TreeWalker};
