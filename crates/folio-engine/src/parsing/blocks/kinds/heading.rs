use crate::{parsing::inline::parse_inline, slug::slugify};

/// ATX-style headings, levels 1 to 4.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 4;

    /// Parses a trimmed line into `(level, text)`.
    ///
    /// The markers must be followed by whitespace; `#tag` and `#####` lines
    /// are not headings.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let level = line.chars().take_while(|&c| c == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let rest = &line[level..];
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((level as u8, rest.trim()))
    }

    /// Levels that carry an anchor id.
    pub fn has_anchor(level: u8) -> bool {
        matches!(level, 2 | 3)
    }

    pub fn render(level: u8, text: &str) -> String {
        let content = parse_inline(text);
        if Self::has_anchor(level) {
            format!(
                "<h{level} id=\"{}\" class=\"mdx-h{level}\">{content}</h{level}>",
                slugify(text)
            )
        } else {
            format!("<h{level} class=\"mdx-h{level}\">{content}</h{level}>")
        }
    }
}
