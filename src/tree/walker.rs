//! TreeWalker - depth-first traversal producing lines and statistics

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{Result, TreeError};
use crate::stats::{StatsCollector, Summary, format_size};

use super::config::TreeOptions;
use super::filter::EntryFilter;
use super::line::{LineKind, TreeLine};
use super::symlink::{LinkStatus, SymlinkGuard};

/// Result of one walk: everything a renderer needs.
#[derive(Debug, Clone)]
pub struct TreeReport {
    pub root: PathBuf,
    pub excluded: Vec<String>,
    pub generated_at: DateTime<Local>,
    pub lines: Vec<TreeLine>,
    pub summary: Summary,
}

impl TreeReport {
    /// Excluded names for report headers: comma-joined, or `None`.
    pub fn excluded_display(&self) -> String {
        if self.excluded.is_empty() {
            "None".to_string()
        } else {
            self.excluded.join(", ")
        }
    }
}

/// Directory entry as seen by the walker. Read lazily at visit time, never
/// cached beyond the current visit.
struct ChildEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Depth-first tree walker.
///
/// The walk is single-threaded and synchronous; all mutable state (visited
/// set, statistics) is created inside `walk()` and confined to that call, so
/// one walker value can run any number of sequential walks, and concurrent
/// walks just need separate walkers.
pub struct TreeWalker {
    options: TreeOptions,
    cancel: Option<Arc<AtomicBool>>,
}

impl TreeWalker {
    pub fn new(options: TreeOptions) -> Self {
        Self {
            options,
            cancel: None,
        }
    }

    /// Attach a cooperative stop flag. The walker checks it once per child
    /// iteration and stops descending as soon as it is set; the report then
    /// contains whatever was emitted up to that point.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Walk `root` and produce the ordered lines plus the summary.
    ///
    /// The only hard failure is a root that does not exist; every node-level
    /// problem below it becomes an annotated line instead.
    pub fn walk(&self, root: &Path) -> Result<TreeReport> {
        if !root.exists() {
            return Err(TreeError::RootNotFound(root.to_path_buf()));
        }

        debug!(root = %root.display(), "starting walk");

        let mut guard = SymlinkGuard::new(self.options.follow_symlinks);
        let mut stats = StatsCollector::new();
        let mut lines = Vec::new();

        // The root goes through the same symlink policy as any other
        // directory node. A cycle is unreachable here (the visited set is
        // still empty), leaving only the report-and-stop case.
        if let LinkStatus::Skipped { target } = guard.classify(root) {
            lines.push(TreeLine::new(
                format!("{}/ -> {} [symlink]", root_name(root), target.display()),
                LineKind::Symlink,
            ));
        } else {
            guard.mark_visited(root);
            match self.read_children(root) {
                Ok(children) => {
                    self.walk_children(&children, "", &mut guard, &mut stats, &mut lines)
                }
                Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                    warn!(path = %root.display(), "permission denied");
                    lines.push(TreeLine::new("[permission denied]", LineKind::PermissionDenied));
                }
                Err(err) => {
                    lines.push(TreeLine::new(format!("[error: {}]", err), LineKind::Error));
                }
            }
        }

        let summary = stats.summarize();
        debug!(
            files = summary.total_files,
            dirs = summary.total_dirs,
            "walk finished"
        );

        Ok(TreeReport {
            root: root.to_path_buf(),
            excluded: self.options.excluded_names.iter().cloned().collect(),
            generated_at: Local::now(),
            lines,
            summary,
        })
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|f| f.load(Ordering::Relaxed))
    }

    /// Read, filter, and sort the children of a directory: directories
    /// before files, case-insensitive lexicographic within each group. This
    /// ordering is load-bearing for determinism and for the last-sibling
    /// connector logic.
    fn read_children(&self, path: &Path) -> io::Result<Vec<ChildEntry>> {
        let filter = EntryFilter::new(&self.options);

        let mut children: Vec<ChildEntry> = fs::read_dir(path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| {
                let path = entry.path();
                let is_dir = path.is_dir();
                ChildEntry {
                    name: entry.file_name().to_string_lossy().to_string(),
                    path,
                    is_dir,
                }
            })
            .filter(|child| filter.include(&child.name, &child.path, child.is_dir))
            .collect();

        children.sort_by_key(|child| (!child.is_dir, child.name.to_lowercase()));
        Ok(children)
    }

    fn walk_children(
        &self,
        children: &[ChildEntry],
        indent: &str,
        guard: &mut SymlinkGuard,
        stats: &mut StatsCollector,
        lines: &mut Vec<TreeLine>,
    ) {
        let last = children.len().saturating_sub(1);
        for (index, child) in children.iter().enumerate() {
            if self.cancelled() {
                debug!("walk cancelled");
                return;
            }

            let is_last = index == last;
            let connector = if is_last { "└── " } else { "├── " };
            let child_indent = format!("{}{}", indent, if is_last { "    " } else { "│   " });

            if child.is_dir {
                self.visit_directory(child, indent, connector, &child_indent, guard, stats, lines);
            } else {
                self.visit_file(child, indent, connector, stats, lines);
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn visit_directory(
        &self,
        child: &ChildEntry,
        indent: &str,
        connector: &str,
        child_indent: &str,
        guard: &mut SymlinkGuard,
        stats: &mut StatsCollector,
        lines: &mut Vec<TreeLine>,
    ) {
        match guard.classify(&child.path) {
            LinkStatus::Cycle { target } => {
                warn!(path = %child.path.display(), "symlink loop detected");
                lines.push(TreeLine::new(
                    format!(
                        "{}{}{}/ -> {} [symlink loop detected]",
                        indent,
                        connector,
                        child.name,
                        target.display()
                    ),
                    LineKind::SymlinkLoop,
                ));
            }
            LinkStatus::Skipped { target } => {
                lines.push(TreeLine::new(
                    format!(
                        "{}{}{}/ -> {} [symlink]",
                        indent,
                        connector,
                        child.name,
                        target.display()
                    ),
                    LineKind::Symlink,
                ));
            }
            LinkStatus::Follow { .. } | LinkStatus::NotSymlink => {
                // A plain directory whose resolved path was already reached
                // through a followed symlink is shown but not descended
                // again; every resolved directory is a recursion target at
                // most once per walk.
                let first_visit = guard.mark_visited(&child.path);

                // The listing is read before the directory's own line is
                // emitted so a failed directory produces exactly one
                // annotated line and no partial children.
                match self.read_children(&child.path) {
                    Ok(grandchildren) => {
                        lines.push(TreeLine::new(
                            format!(
                                "{}{}{}/{}",
                                indent,
                                connector,
                                child.name,
                                self.metadata_suffix(&child.path)
                            ),
                            LineKind::Dir,
                        ));
                        stats.record_directory();
                        if first_visit {
                            self.walk_children(&grandchildren, child_indent, guard, stats, lines);
                        }
                    }
                    Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                        warn!(path = %child.path.display(), "permission denied");
                        lines.push(TreeLine::new(
                            format!("{}{}{}/ [permission denied]", indent, connector, child.name),
                            LineKind::PermissionDenied,
                        ));
                        stats.record_directory();
                    }
                    Err(err) => {
                        lines.push(TreeLine::new(
                            format!("{}{}{}/ [error: {}]", indent, connector, child.name, err),
                            LineKind::Error,
                        ));
                        stats.record_directory();
                    }
                }
            }
        }
    }

    fn visit_file(
        &self,
        child: &ChildEntry,
        indent: &str,
        connector: &str,
        stats: &mut StatsCollector,
        lines: &mut Vec<TreeLine>,
    ) {
        // Metadata is read once and shared by rendering and aggregation, so
        // the collector sees each visible entry exactly once no matter
        // whether metadata display is on.
        let meta = fs::metadata(&child.path).ok();
        let size = meta.as_ref().map(|m| m.len());
        let modified = meta
            .as_ref()
            .and_then(|m| m.modified().ok())
            .map(DateTime::<Local>::from);

        stats.record_file(&child.path, size, modified);

        let (suffix, kind) = if !self.options.show_metadata {
            (String::new(), LineKind::File)
        } else {
            match (size, modified) {
                (Some(size), Some(modified)) => (
                    format!(
                        " [{}, modified: {}]",
                        format_size(size),
                        modified.format("%Y-%m-%d %H:%M")
                    ),
                    LineKind::File,
                ),
                _ => (" [error reading metadata]".to_string(), LineKind::Error),
            }
        };

        lines.push(TreeLine::new(
            format!("{}{}{}{}", indent, connector, child.name, suffix),
            kind,
        ));
    }

    /// Bracketed metadata suffix for a directory line, or empty when
    /// metadata display is off.
    fn metadata_suffix(&self, path: &Path) -> String {
        if !self.options.show_metadata {
            return String::new();
        }
        match fs::metadata(path).and_then(|m| Ok((m.len(), m.modified()?))) {
            Ok((size, modified)) => format!(
                " [{}, modified: {}]",
                format_size(size),
                DateTime::<Local>::from(modified).format("%Y-%m-%d %H:%M")
            ),
            Err(_) => " [error reading metadata]".to_string(),
        }
    }
}

/// Name of a path for display, defaulting to "." when there is none.
fn root_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}
