//! # folio-engine
//!
//! Renders a small markdown dialect (headings, lists, blockquotes, pipe
//! tables, fenced code, inline emphasis, code and links) to HTML.
//!
//! ```text
//! markdown → highlight pre-pass → line scan → HTML
//!            (async, per fence)    (sync, one pass)
//! ```
//!
//! The produced HTML is not sanitized. Only feed it author-controlled content.

pub mod escape;
pub mod highlight;
pub mod parsing;
pub mod render;
pub mod slug;
pub mod toc;

// Re-export key types for easier usage
pub use highlight::{
    CachedHighlighter, HighlightError, HighlightOptions, Highlighter, SyntectHighlighter,
    highlight_code_blocks,
};
pub use parsing::{inline::parse_inline, parse_markdown};
pub use render::{RenderedDocument, Renderer, render_markdown};
pub use slug::slugify;
pub use toc::{TocEntry, heading_index};
