//! Console printing with colors
//!
//! Streams a report to stdout with termcolor styling: directories bold blue,
//! symlinks cyan, error lines red. The content is identical to the text
//! renderer's tree section plus the summary block.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{LineKind, TreeReport};

/// Prints a `TreeReport` to stdout.
pub struct ConsolePrinter {
    use_color: bool,
}

impl ConsolePrinter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    pub fn print(&self, report: &TreeReport) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        let mut bold = ColorSpec::new();
        bold.set_bold(true);

        writeln!(stdout, "Directory tree for: {}", report.root.display())?;
        writeln!(stdout, "Excluded items: {}", report.excluded_display())?;
        writeln!(stdout)?;

        writeln!(stdout, ".")?;
        for line in &report.lines {
            match line_color(line.kind) {
                Some(spec) => {
                    stdout.set_color(&spec)?;
                    writeln!(stdout, "{}", line.text)?;
                    stdout.reset()?;
                }
                None => writeln!(stdout, "{}", line.text)?,
            }
        }
        writeln!(stdout)?;

        stdout.set_color(&bold)?;
        writeln!(stdout, "Summary")?;
        stdout.reset()?;
        writeln!(stdout, "───────")?;
        writeln!(stdout, "Total files:       {}", report.summary.total_files)?;
        writeln!(stdout, "Total directories: {}", report.summary.total_dirs)?;
        writeln!(stdout, "Total size:        {}", report.summary.total_size)?;
        writeln!(stdout, "Top file types:    {}", report.summary.top_extensions)?;
        writeln!(stdout, "Largest file:      {}", report.summary.largest_file)?;
        writeln!(stdout, "Newest file:       {}", report.summary.newest_file)?;

        Ok(())
    }
}

fn line_color(kind: LineKind) -> Option<ColorSpec> {
    let mut spec = ColorSpec::new();
    match kind {
        LineKind::Dir => {
            spec.set_fg(Some(Color::Blue)).set_bold(true);
            Some(spec)
        }
        LineKind::Symlink => {
            spec.set_fg(Some(Color::Cyan));
            Some(spec)
        }
        _ if kind.is_error() => {
            spec.set_fg(Some(Color::Red));
            Some(spec)
        }
        _ => None,
    }
}
