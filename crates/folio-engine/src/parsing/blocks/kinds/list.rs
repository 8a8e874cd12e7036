use regex::Regex;
use std::sync::OnceLock;

use crate::parsing::inline::parse_inline;

/// Which list, if any, the scanner has open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul class=\"mdx-ul\">",
            ListKind::Ordered => "<ol class=\"mdx-ol\">",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
        }
    }
}

/// Single-level list items. Nesting is not supported.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [&'static str; 2] = ["- ", "* "];

    fn ordered_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(\d+)\.\s+(.+)$").expect("Invalid ordered list regex"))
    }

    /// Text after a `- ` or `* ` marker.
    pub fn bullet(line: &str) -> Option<&str> {
        Self::BULLETS.iter().find_map(|marker| line.strip_prefix(*marker))
    }

    /// Text after an `N. ` marker. The number itself is discarded.
    pub fn numbered(line: &str) -> Option<&str> {
        Self::ordered_regex()
            .captures(line)
            .and_then(|caps| caps.get(2))
            .map(|m| m.as_str())
    }

    pub fn render(text: &str) -> String {
        format!("<li class=\"mdx-li\">{}</li>", parse_inline(text))
    }
}
