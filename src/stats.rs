//! Aggregate statistics collected during tree traversal
//!
//! `StatsCollector` accumulates running totals as the walker visits entries
//! and produces a human-formatted `Summary` on demand. A collector is owned
//! by exactly one walk; the walker creates a fresh one per `walk()` call so
//! concurrent walks can never share totals.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::Serialize;

/// Histogram bucket for files without an extension.
pub const NO_EXTENSION: &str = "no_extension";

/// How many extension buckets the summary reports.
const TOP_EXTENSIONS: usize = 5;

/// Statistics collector that accumulates data during tree traversal.
///
/// Entries are recorded exactly once each, at the moment their line is
/// emitted. Entries dropped by the filter never reach the collector, so the
/// totals always describe what the rendered tree actually shows.
#[derive(Debug, Default)]
pub struct StatsCollector {
    total_files: usize,
    total_dirs: usize,
    total_size: u64,
    /// Maps dot-prefixed lowercase extension (or `no_extension`) -> file count
    extension_counts: HashMap<String, usize>,
    largest_file: Option<(PathBuf, u64)>,
    newest_file: Option<(PathBuf, DateTime<Local>)>,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a visible file.
    ///
    /// `size` and `modified` are `None` when the file's metadata could not be
    /// read; such files still count toward `total_files` and the extension
    /// histogram but are excluded from size and recency aggregates.
    pub fn record_file(&mut self, path: &Path, size: Option<u64>, modified: Option<DateTime<Local>>) {
        self.total_files += 1;

        let bucket = extension_bucket(path);
        *self.extension_counts.entry(bucket).or_insert(0) += 1;

        if let Some(size) = size {
            self.total_size += size;
            // Strict > keeps the first-seen file on ties, which makes the
            // result deterministic under the walker's fixed ordering.
            if self.largest_file.as_ref().is_none_or(|(_, max)| size > *max) {
                self.largest_file = Some((path.to_path_buf(), size));
            }
        }

        if let Some(modified) = modified {
            if self
                .newest_file
                .as_ref()
                .is_none_or(|(_, newest)| modified > *newest)
            {
                self.newest_file = Some((path.to_path_buf(), modified));
            }
        }
    }

    /// Record a visible directory.
    pub fn record_directory(&mut self) {
        self.total_dirs += 1;
    }

    pub fn total_files(&self) -> usize {
        self.total_files
    }

    pub fn total_dirs(&self) -> usize {
        self.total_dirs
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Produce the human-formatted projection of the running totals.
    pub fn summarize(&self) -> Summary {
        let mut buckets: Vec<(&String, &usize)> = self.extension_counts.iter().collect();
        // Count descending, then extension ascending so ties are stable.
        buckets.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

        let top_extensions = buckets
            .iter()
            .take(TOP_EXTENSIONS)
            .map(|(ext, count)| format!("{}: {}", ext, count))
            .collect::<Vec<_>>()
            .join(", ");

        let largest_file = match &self.largest_file {
            Some((path, size)) => format!("{} ({})", basename(path), format_size(*size)),
            None => "N/A".to_string(),
        };

        let newest_file = match &self.newest_file {
            Some((path, modified)) => {
                format!("{} ({})", basename(path), modified.format("%Y-%m-%d %H:%M"))
            }
            None => "N/A".to_string(),
        };

        Summary {
            total_files: self.total_files,
            total_dirs: self.total_dirs,
            total_size: format_size(self.total_size),
            top_extensions,
            largest_file,
            newest_file,
        }
    }
}

/// Read-only, human-formatted projection of the running totals.
///
/// Both the text and the HTML renderer consume the same `Summary` instance,
/// which is what guarantees their numeric values agree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_files: usize,
    pub total_dirs: usize,
    pub total_size: String,
    pub top_extensions: String,
    pub largest_file: String,
    pub newest_file: String,
}

/// Format a byte count using binary (1024-based) units.
///
/// Below 1 KiB as plain bytes, below 1 MiB as KB with one decimal, below
/// 1 GiB as MB with one decimal, otherwise GB with two decimals. Every size
/// shown anywhere in the output goes through this single function.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes < KB {
        format!("{} bytes", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else if bytes < GB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    }
}

/// Histogram key for a path: dot-prefixed lowercase extension, or the
/// `no_extension` bucket.
pub fn extension_bucket(path: &Path) -> String {
    match path.extension() {
        Some(ext) => format!(".{}", ext.to_string_lossy().to_lowercase()),
        None => NO_EXTENSION.to_string(),
    }
}

fn basename(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}
