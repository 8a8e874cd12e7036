//! # Inline Parsing
//!
//! Converts span-level markdown (code, emphasis, links) inside one block's
//! text into HTML. [`parse_inline`] is a pure function over a string, so every
//! rule can be tested without the block scanner.
//!
//! ## Rule Order
//!
//! 1. Code spans: raw zones, masked out before anything else runs
//! 2. Escaped asterisks (`\*`) become a literal `*`
//! 3. Emphasis: `***strong em***`, then `**strong**`, then `*em*`
//! 4. Links: `[text](url)`
//!
//! Later rules never see the markdown consumed by earlier ones, and none of
//! the generated markup contains syntax any rule matches, so the function is
//! idempotent over its own output.
//!
//! ## Modules
//!
//! - **`kinds`**: Inline-specific types owning their delimiters (CodeSpan, Emphasis, Link)
//! - **`cursor`**: `Cursor` for byte-wise scanning of code spans
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;

pub use parser::parse_inline;
