//! Directory tree walking logic
//!
//! This module produces the ordered sequence of rendered tree lines for a
//! root directory while feeding the statistics collector:
//!
//! - `TreeOptions`: validated per-walk configuration
//! - `EntryFilter`: name exclusions and the extension allow-list
//! - `SymlinkGuard`: visit-once bookkeeping that bounds symlink cycles
//! - `TreeWalker`: the depth-first walker composing the above

mod config;
mod filter;
mod line;
mod symlink;
mod walker;

// Re-export public types
pub use config::TreeOptions;
pub use filter::EntryFilter;
pub use line::{LineKind, TreeLine};
pub use symlink::{LinkStatus, SymlinkGuard};
pub use walker::{TreeReport, TreeWalker};
