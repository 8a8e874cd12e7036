//! Anchor ids for headings.
//!
//! Both the parser (for `id` attributes) and the heading index derive ids
//! through [`slugify`], so a table of contents always points at real anchors.

use regex::Regex;
use std::sync::OnceLock;

fn whitespace_regex() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("Invalid whitespace regex"))
}

fn disallowed_regex() -> &'static Regex {
    static DISALLOWED: OnceLock<Regex> = OnceLock::new();
    DISALLOWED.get_or_init(|| Regex::new(r"[^a-z0-9-]").expect("Invalid slug regex"))
}

/// Derives a URL-safe anchor id from heading text.
///
/// Lowercases, collapses each whitespace run to a single `-`, then drops every
/// character outside `[a-z0-9-]`. Identical headings produce identical ids.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    let hyphenated = whitespace_regex().replace_all(&lower, "-");
    disallowed_regex().replace_all(&hyphenated, "").into_owned()
}
