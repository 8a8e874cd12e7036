//! # Markdown Parsing
//!
//! Line-oriented conversion of the supported markdown subset to HTML.
//! Fenced code blocks are expected to have been replaced by rendered HTML
//! already (see [`crate::highlight`]); everything else is handled here.

pub mod blocks;
pub mod inline;

use blocks::{BlockBuilder, MarkdownLineClassifier};

/// Converts a document to HTML in one forward pass over its lines.
///
/// Never fails: malformed constructs degrade to paragraphs or are dropped
/// (tables without a separator row).
pub fn parse_markdown(doc: &str) -> String {
    let classifier = MarkdownLineClassifier;
    doc.lines()
        .fold(BlockBuilder::new(), |mut builder, line| {
            builder.push(&classifier.classify(line));
            builder
        })
        .finish()
}
