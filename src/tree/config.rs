//! Configuration types for tree walking

use std::collections::BTreeSet;

use crate::error::{Result, TreeError};

/// Characters that are never valid in an exclusion name. Exclusions match
/// entry names exactly, so path separators and glob metacharacters indicate
/// caller confusion and are rejected before the walk starts.
const INVALID_EXCLUSION_CHARS: [char; 10] = ['\\', '/', '*', '?', '[', ']', ':', '|', '<', '>'];

/// Configuration for one tree walk. Supplied once per traversal and never
/// mutated mid-walk.
#[derive(Debug, Clone, Default)]
pub struct TreeOptions {
    /// Entry names excluded from the tree, regardless of type
    pub excluded_names: BTreeSet<String>,
    /// Append `[size, modified: timestamp]` to every line
    pub show_metadata: bool,
    /// Descend into symlinked directories (cycles are still detected)
    pub follow_symlinks: bool,
    /// Extension allow-list for files (lower-cased, dot-prefixed).
    /// `None` includes everything; directories always pass.
    pub extension_filter: Option<BTreeSet<String>>,
}

impl TreeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a comma-separated exclusion list.
    pub fn with_excluded_list(mut self, input: &str) -> Result<Self> {
        self.excluded_names = parse_excluded_names(input)?;
        Ok(self)
    }

    /// Parse a comma-separated extension list. An empty input leaves the
    /// filter unset.
    pub fn with_extension_list(mut self, input: &str) -> Self {
        self.extension_filter = parse_extension_filter(input);
        self
    }

    pub fn show_metadata(mut self, show: bool) -> Self {
        self.show_metadata = show;
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    /// Excluded names joined for display in report headers.
    pub fn excluded_display(&self) -> String {
        if self.excluded_names.is_empty() {
            "None".to_string()
        } else {
            self.excluded_names
                .iter()
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

/// Parse a comma-separated exclusion list, rejecting names that contain path
/// separators or glob metacharacters.
fn parse_excluded_names(input: &str) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for item in input.split(',') {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        if item.chars().any(|c| INVALID_EXCLUSION_CHARS.contains(&c)) {
            return Err(TreeError::InvalidExclusion(item.to_string()));
        }
        names.insert(item.to_string());
    }
    Ok(names)
}

/// Parse a comma-separated extension list into normalized form: trimmed,
/// lower-cased, dot-prefixed. Returns `None` when no usable entries remain.
fn parse_extension_filter(input: &str) -> Option<BTreeSet<String>> {
    let extensions: BTreeSet<String> = input
        .split(',')
        .map(|ext| ext.trim().to_lowercase())
        .filter(|ext| !ext.is_empty() && *ext != ".")
        .map(|ext| {
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .collect();

    if extensions.is_empty() {
        None
    } else {
        Some(extensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_excluded_names() {
        let names = parse_excluded_names(".git, node_modules, __pycache__").unwrap();
        assert!(names.contains(".git"));
        assert!(names.contains("node_modules"));
        assert!(names.contains("__pycache__"));
        assert_eq!(names.len(), 3);
    }

    #[test]
    fn test_parse_excluded_names_skips_empty_items() {
        let names = parse_excluded_names("a,, b ,").unwrap();
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_parse_excluded_names_rejects_separators_and_globs() {
        for bad in ["src/main", "back\\slash", "*.rs", "what?", "[set]", "a:b", "x|y", "<tag>"] {
            assert!(
                matches!(parse_excluded_names(bad), Err(TreeError::InvalidExclusion(_))),
                "expected rejection for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_parse_extension_filter_normalizes() {
        let filter = parse_extension_filter(".PY, txt , .Md").unwrap();
        assert!(filter.contains(".py"));
        assert!(filter.contains(".txt"));
        assert!(filter.contains(".md"));
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_parse_extension_filter_empty_input() {
        assert!(parse_extension_filter("").is_none());
        assert!(parse_extension_filter(" , ,").is_none());
    }

    #[test]
    fn test_excluded_display() {
        let options = TreeOptions::new();
        assert_eq!(options.excluded_display(), "None");

        let options = TreeOptions::new().with_excluded_list("b, a").unwrap();
        assert_eq!(options.excluded_display(), "a, b");
    }
}
