//! Rendered tree lines and their classification

/// Classification of a rendered line, used by renderers to style output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Dir,
    File,
    /// Symlink reported but not followed
    Symlink,
    /// Symlink whose target was already visited in this walk
    SymlinkLoop,
    PermissionDenied,
    /// Any other per-node failure (broken listing, unreadable metadata)
    Error,
}

impl LineKind {
    /// CSS class used by the HTML renderer.
    pub fn html_class(&self) -> &'static str {
        match self {
            LineKind::Dir | LineKind::Symlink => "folder",
            LineKind::File => "file",
            LineKind::SymlinkLoop | LineKind::PermissionDenied | LineKind::Error => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(
            self,
            LineKind::SymlinkLoop | LineKind::PermissionDenied | LineKind::Error
        )
    }
}

/// One rendered line of the directory tree, including its box-drawing
/// prefix. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub text: String,
    pub kind: LineKind,
}

impl TreeLine {
    pub fn new(text: impl Into<String>, kind: LineKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_class_mapping() {
        assert_eq!(LineKind::Dir.html_class(), "folder");
        assert_eq!(LineKind::Symlink.html_class(), "folder");
        assert_eq!(LineKind::File.html_class(), "file");
        assert_eq!(LineKind::SymlinkLoop.html_class(), "error");
        assert_eq!(LineKind::PermissionDenied.html_class(), "error");
        assert_eq!(LineKind::Error.html_class(), "error");
    }

    #[test]
    fn test_is_error() {
        assert!(!LineKind::Dir.is_error());
        assert!(!LineKind::File.is_error());
        assert!(!LineKind::Symlink.is_error());
        assert!(LineKind::PermissionDenied.is_error());
    }
}
