//! Output rendering for tree reports
//!
//! Renderers are pure functions over a `TreeReport`; they hold no state of
//! their own and both document formats read the same `Summary`, so their
//! numeric values always agree.

mod console;
mod html;
mod text;

pub use console::ConsolePrinter;
pub use html::render_html;
pub use text::render_text;
