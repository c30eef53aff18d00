//! HTML report rendering
//!
//! Produces a self-contained page with inline styling: a header block
//! mirroring the text header, a summary grid, and a tree container whose
//! children are `<div>` elements classed by each line's `LineKind`.

use crate::tree::TreeReport;

/// Render the full HTML document.
pub fn render_html(report: &TreeReport) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Directory Tree for {root}</title>
    <style>
        body {{ font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; margin: 0; padding: 0; background-color: #f5f5f5; color: #333; }}
        .container {{ max-width: 1200px; margin: 0 auto; padding: 20px; }}
        .header {{ background-color: #2c3e50; color: white; padding: 20px; border-radius: 8px 8px 0 0; }}
        .summary {{ background-color: white; padding: 20px; margin-bottom: 20px; border-radius: 0 0 8px 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
        .summary-grid {{ display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 20px; }}
        .summary-item {{ background-color: #f8f9fa; padding: 15px; border-radius: 8px; border-left: 4px solid #3498db; }}
        .summary-item h3 {{ margin-top: 0; color: #2c3e50; }}
        .tree-container {{ background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); font-family: 'Courier New', monospace; }}
        .folder {{ color: #3498db; font-weight: bold; }}
        .file {{ color: #333; }}
        .error {{ color: #e74c3c; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Directory Tree Report</h1>
            <p><strong>Path:</strong> {root}</p>
            <p><strong>Generated:</strong> {generated}</p>
            <p><strong>Excluded items:</strong> {excluded}</p>
        </div>

        <div class="summary">
            <h2>Summary</h2>
            <div class="summary-grid">
                <div class="summary-item">
                    <h3>File Statistics</h3>
                    <p><strong>Total Files:</strong> {total_files}</p>
                    <p><strong>Total Directories:</strong> {total_dirs}</p>
                    <p><strong>Total Size:</strong> {total_size}</p>
                </div>
                <div class="summary-item">
                    <h3>File Types</h3>
                    <p><strong>Top types:</strong> {top_extensions}</p>
                </div>
                <div class="summary-item">
                    <h3>Notable Files</h3>
                    <p><strong>Largest:</strong> {largest}</p>
                    <p><strong>Newest:</strong> {newest}</p>
                </div>
            </div>
        </div>

        <div class="tree-container">
            <h2>Directory Tree</h2>
                <div>.</div>
"#,
        root = escape_html(&report.root.display().to_string()),
        generated = report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        excluded = escape_html(&report.excluded_display()),
        total_files = report.summary.total_files,
        total_dirs = report.summary.total_dirs,
        total_size = escape_html(&report.summary.total_size),
        top_extensions = escape_html(&report.summary.top_extensions),
        largest = escape_html(&report.summary.largest_file),
        newest = escape_html(&report.summary.newest_file),
    ));

    for line in &report.lines {
        out.push_str(&format!(
            "                <div class=\"{}\">{}</div>\n",
            line.kind.html_class(),
            escape_tree_line(&line.text)
        ));
    }

    out.push_str(
        r#"        </div>
    </div>
</body>
</html>"#,
    );

    out
}

/// Escape markup-significant characters.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape a tree line, additionally converting spaces to non-breaking spaces
/// so the box-drawing indentation survives HTML whitespace collapsing.
fn escape_tree_line(text: &str) -> String {
    escape_html(text).replace(' ', "&nbsp;")
}
