//! Plain-text report rendering

use crate::tree::TreeReport;

/// Render the full text document: header, summary block, then the tree with
/// a literal `.` line for the root.
pub fn render_text(report: &TreeReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Directory tree for: {}\n", report.root.display()));
    out.push_str(&format!(
        "Generated on: {}\n",
        report.generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("Excluded items: {}\n\n", report.excluded_display()));

    out.push_str("SUMMARY:\n");
    out.push_str(&format!("Total files: {}\n", report.summary.total_files));
    out.push_str(&format!("Total directories: {}\n", report.summary.total_dirs));
    out.push_str(&format!("Total size: {}\n", report.summary.total_size));
    out.push_str(&format!("Top file types: {}\n", report.summary.top_extensions));
    out.push_str(&format!("Largest file: {}\n", report.summary.largest_file));
    out.push_str(&format!("Newest file: {}\n\n", report.summary.newest_file));

    out.push_str("DIRECTORY TREE:\n");
    out.push_str(".\n");
    for line in &report.lines {
        out.push_str(&line.text);
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{TreeOptions, TreeWalker};
    use crate::test_utils::TestTree;

    #[test]
    fn test_text_document_layout() {
        let tree = TestTree::new();
        tree.add_file("a.txt", "hello");

        let options = TreeOptions::new().with_excluded_list(".git, target").unwrap();
        let report = TreeWalker::new(options).walk(tree.path()).unwrap();
        let doc = render_text(&report);

        assert!(doc.starts_with("Directory tree for: "));
        assert!(doc.contains("Generated on: "));
        assert!(doc.contains("Excluded items: .git, target\n"));
        assert!(doc.contains("\nSUMMARY:\n"));
        assert!(doc.contains("Total files: 1\n"));
        assert!(doc.contains("Total directories: 0\n"));
        assert!(doc.contains("Total size: 5 bytes\n"));
        assert!(doc.contains("Top file types: .txt: 1\n"));
        assert!(doc.contains("\nDIRECTORY TREE:\n.\n└── a.txt\n"));
    }

    #[test]
    fn test_no_exclusions_renders_none() {
        let tree = TestTree::new();
        let report = TreeWalker::new(TreeOptions::new()).walk(tree.path()).unwrap();
        let doc = render_text(&report);
        assert!(doc.contains("Excluded items: None\n"));
        assert!(doc.contains("Largest file: N/A\n"));
        assert!(doc.contains("Newest file: N/A\n"));
    }
}
