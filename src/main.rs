//! CLI entry point for canopy

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use canopy::{
    ConsolePrinter, TreeError, TreeOptions, TreeReport, TreeWalker, render_html, render_text,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Where the report goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Print the tree and summary to the console
    #[default]
    Console,
    /// Write a plain-text report file
    Text,
    /// Write a self-contained HTML report file
    Html,
}

#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Generate a directory tree with summary statistics")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Comma-separated entry names to exclude (no path separators or globs)
    #[arg(short = 'x', long = "exclude", value_name = "NAMES")]
    exclude: Option<String>,

    /// Comma-separated extension filter for files, e.g. ".md,.rs"
    #[arg(short = 'e', long = "ext", value_name = "EXTS")]
    ext: Option<String>,

    /// Append [size, modified] metadata to every line
    #[arg(short = 'm', long = "metadata")]
    metadata: bool,

    /// Descend into symlinked directories (cycles are still detected)
    #[arg(long = "follow-symlinks")]
    follow_symlinks: bool,

    /// Output destination: console, text file, or HTML report
    #[arg(short = 'o', long = "output", value_name = "FORMAT", default_value = "console")]
    output: OutputFormat,

    /// Report file path (defaults to directory_tree.txt / .html in PATH)
    #[arg(long = "out", value_name = "FILE")]
    out: Option<PathBuf>,

    /// Print the summary as JSON instead of the tree
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all log output below warnings
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    let options = match build_options(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    let walker = TreeWalker::new(options);
    let report = match walker.walk(&args.path) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("canopy: {}", e);
            process::exit(1);
        }
    };

    let result = if args.json {
        print_summary_json(&report)
    } else {
        match args.output {
            OutputFormat::Console => {
                ConsolePrinter::new(should_use_color(args.color)).print(&report)
            }
            OutputFormat::Text => {
                let path = report_path(&args, "directory_tree.txt");
                match write_report(&path, &render_text(&report)) {
                    Ok(()) => {
                        println!("Directory tree exported to: {}", path.display());
                        Ok(())
                    }
                    Err(e) => {
                        eprintln!("canopy: {}", e);
                        process::exit(1);
                    }
                }
            }
            OutputFormat::Html => {
                let path = report_path(&args, "directory_tree.html");
                match write_report(&path, &render_html(&report)) {
                    Ok(()) => {
                        println!("HTML report generated at: {}", path.display());
                        Ok(())
                    }
                    Err(e) => {
                        eprintln!("canopy: {}", e);
                        process::exit(1);
                    }
                }
            }
        }
    };

    if let Err(e) = result {
        eprintln!("canopy: error writing output: {}", e);
        process::exit(1);
    }
}

fn build_options(args: &Args) -> canopy::Result<TreeOptions> {
    let mut options = TreeOptions::new()
        .show_metadata(args.metadata)
        .follow_symlinks(args.follow_symlinks);
    if let Some(exclude) = &args.exclude {
        options = options.with_excluded_list(exclude)?;
    }
    if let Some(ext) = &args.ext {
        options = options.with_extension_list(ext);
    }
    Ok(options)
}

/// Default report location matches the walked directory unless --out is set.
fn report_path(args: &Args, default_name: &str) -> PathBuf {
    args.out
        .clone()
        .unwrap_or_else(|| args.path.join(default_name))
}

fn write_report(path: &PathBuf, content: &str) -> canopy::Result<()> {
    fs::write(path, content).map_err(|source| TreeError::Io {
        path: path.clone(),
        source,
    })
}

fn print_summary_json(report: &TreeReport) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(&report.summary)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    println!("{}", json);
    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("canopy={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
