use serde::Serialize;

use crate::{
    highlight::find_fenced_blocks,
    parsing::blocks::kinds::Heading,
    slug::slugify,
};

/// One linkable heading of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: u8,
    pub text: String,
    /// Matches the `id` the parser gives the rendered heading.
    pub id: String,
}

/// Lists the level 2 and 3 headings of raw markdown, in document order.
///
/// Lines inside fenced code blocks are ignored, exactly as the renderer
/// ignores them.
pub fn heading_index(markdown: &str) -> Vec<TocEntry> {
    let mut text = markdown.to_string();
    for block in find_fenced_blocks(markdown) {
        text = text.replacen(block.source, "", 1);
    }

    text.lines()
        .filter_map(|line| Heading::parse(line.trim()))
        .filter(|(level, _)| Heading::has_anchor(*level))
        .map(|(level, text)| TocEntry {
            level,
            text: text.to_string(),
            id: slugify(text),
        })
        .collect()
}
