use super::kinds::{BlockQuote, CodeFence, Heading, ListItem, Rule, Table};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context. Borrowed text is already trimmed
/// and stripped of its block marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// A code block already rendered by the highlighting pre-pass.
    CodeBlock(&'a str),
    /// A raw `| a | b |` row, kept whole until the table is flushed.
    TableRow(&'a str),
    /// Text after the `>` prefix.
    Quote(&'a str),
    Heading { level: u8, text: &'a str },
    Rule,
    /// Text after a `- ` or `* ` marker.
    Bullet(&'a str),
    /// Text after an `N. ` marker.
    Numbered(&'a str),
    /// Anything else; becomes a paragraph.
    Text(&'a str),
}

/// Classifies individual lines for the block parsing phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`]; the first matching rule wins.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let line = line.trim();

        if line.is_empty() {
            return LineClass::Blank;
        }
        if CodeFence::is_container(line) {
            return LineClass::CodeBlock(line);
        }
        if Table::is_row(line) {
            return LineClass::TableRow(line);
        }
        if let Some(text) = BlockQuote::strip_prefix(line) {
            return LineClass::Quote(text);
        }
        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if Rule::matches(line) {
            return LineClass::Rule;
        }
        if let Some(text) = ListItem::bullet(line) {
            return LineClass::Bullet(text);
        }
        if let Some(text) = ListItem::numbered(line) {
            return LineClass::Numbered(text);
        }
        LineClass::Text(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("   \t ", LineClass::Blank)]
    #[case("| a | b |", LineClass::TableRow("| a | b |"))]
    #[case("  |---|---|  ", LineClass::TableRow("|---|---|"))]
    #[case("> quoted", LineClass::Quote("quoted"))]
    #[case("## Section", LineClass::Heading { level: 2, text: "Section" })]
    #[case("---", LineClass::Rule)]
    #[case("***", LineClass::Rule)]
    #[case("- item", LineClass::Bullet("item"))]
    #[case("* item", LineClass::Bullet("item"))]
    #[case("3. third", LineClass::Numbered("third"))]
    #[case("  plain text  ", LineClass::Text("plain text"))]
    #[case("##### too deep", LineClass::Text("##### too deep"))]
    fn classify_cases(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(MarkdownLineClassifier.classify(line), expected);
    }

    #[test]
    fn rendered_code_block_wins_over_other_rules() {
        let line = "<div class=\"mdx-code-block\"><div class=\"mdx-code-header\">|";
        assert_eq!(
            MarkdownLineClassifier.classify(line),
            LineClass::CodeBlock(line)
        );
    }

    #[test]
    fn rule_is_checked_before_bullets() {
        assert_eq!(MarkdownLineClassifier.classify("***"), LineClass::Rule);
        assert_eq!(
            MarkdownLineClassifier.classify("** bold start"),
            LineClass::Text("** bold start")
        );
    }
}
