use crate::parsing::inline::parse_inline;

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote-related syntax knowledge lives here, not scattered in
/// classifier code.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Returns the quoted text (trimmed) if `line` is a blockquote line.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.strip_prefix(Self::PREFIX).map(str::trim)
    }

    /// Renders the buffered, already inline-parsed fragments as one quote.
    pub fn render(fragments: &[String]) -> String {
        format!(
            "<blockquote class=\"mdx-blockquote\"><p>{}</p></blockquote>",
            fragments.join(" ")
        )
    }

    /// Inline-parses one quoted line; empty lines contribute nothing.
    pub fn fragment(text: &str) -> Option<String> {
        if text.is_empty() {
            None
        } else {
            Some(parse_inline(text))
        }
    }
}
