//! # Block Parsing
//!
//! Two-phase, single forward pass over the lines of a document.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): Each trimmed line is classified into a
//!    `LineClass` from local facts only. Rules are tried in a fixed order and the
//!    first match wins.
//!
//! 2. **Block Construction** (`builder`): A `BlockBuilder` holds the single open
//!    block (list, table or blockquote) and emits HTML as blocks open and close.
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters and HTML rendering
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - At most one of list, table or blockquote is open at any time
//! - A block is closed before any output for the next line is emitted
//! - Rendered code blocks arrive as one line and pass through untouched
//! - Headings, rules and paragraphs are never buffered

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
