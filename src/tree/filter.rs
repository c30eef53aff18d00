//! Entry filtering for tree walking

use std::path::Path;

use crate::stats::extension_bucket;

use super::config::TreeOptions;

/// Decides whether a directory entry appears in the tree.
///
/// Name exclusions apply to every entry type. The extension allow-list
/// applies to files only: directories always pass so the tree under them can
/// still be explored, even if that leaves an empty directory in the output.
pub struct EntryFilter<'a> {
    options: &'a TreeOptions,
}

impl<'a> EntryFilter<'a> {
    pub fn new(options: &'a TreeOptions) -> Self {
        Self { options }
    }

    /// Check if an entry should be included.
    pub fn include(&self, name: &str, path: &Path, is_dir: bool) -> bool {
        if self.options.excluded_names.contains(name) {
            return false;
        }

        if is_dir {
            return true;
        }

        match &self.options.extension_filter {
            Some(filter) => filter.contains(&extension_bucket(path)),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options_with(excluded: &str, extensions: &str) -> TreeOptions {
        let mut options = TreeOptions::new().with_excluded_list(excluded).unwrap();
        if !extensions.is_empty() {
            options = options.with_extension_list(extensions);
        }
        options
    }

    #[test]
    fn test_excluded_name_drops_any_type() {
        let options = options_with("node_modules", "");
        let filter = EntryFilter::new(&options);
        assert!(!filter.include("node_modules", Path::new("node_modules"), true));
        assert!(!filter.include("node_modules", Path::new("node_modules"), false));
        assert!(filter.include("src", Path::new("src"), true));
    }

    #[test]
    fn test_extension_filter_applies_to_files_only() {
        let options = options_with("", ".md");
        let filter = EntryFilter::new(&options);
        assert!(filter.include("README.md", Path::new("README.md"), false));
        assert!(filter.include("NOTES.MD", Path::new("NOTES.MD"), false));
        assert!(!filter.include("main.rs", Path::new("main.rs"), false));
        // Directories pass regardless of extension
        assert!(filter.include("src", Path::new("src"), true));
        assert!(filter.include("v1.0", Path::new("v1.0"), true));
    }

    #[test]
    fn test_no_extension_file_fails_allow_list() {
        let options = options_with("", ".txt");
        let filter = EntryFilter::new(&options);
        assert!(!filter.include("Makefile", Path::new("Makefile"), false));
    }

    #[test]
    fn test_unfiltered_includes_everything() {
        let options = TreeOptions::new();
        let filter = EntryFilter::new(&options);
        assert!(filter.include("anything.xyz", Path::new("anything.xyz"), false));
        assert!(filter.include("Makefile", Path::new("Makefile"), false));
    }
}
