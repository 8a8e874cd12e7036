use crate::parsing::inline::parse_inline;

use super::{
    classify::LineClass,
    kinds::{BlockQuote, Heading, ListItem, ListKind, Rule, Table},
};

/// The one block that may be open between lines.
#[derive(Debug, Clone, PartialEq, Eq)]
enum OpenBlock {
    None,
    List(ListKind),
    /// Raw rows, rendered on flush.
    Table(Vec<String>),
    /// Inline-parsed fragments, space-joined on flush.
    BlockQuote(Vec<String>),
}

/// Block construction state machine.
///
/// Fed one [`LineClass`] at a time; whatever block is open is closed before
/// output for a line of a different kind is emitted.
pub struct BlockBuilder {
    open: OpenBlock,
    out: Vec<String>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            open: OpenBlock::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass<'_>) {
        match *c {
            LineClass::Blank => self.close_block(),
            LineClass::CodeBlock(html) => {
                self.close_block();
                self.out.push(html.to_string());
            }
            LineClass::TableRow(row) => self.push_table_row(row),
            LineClass::Quote(text) => self.push_quote_line(text),
            LineClass::Heading { level, text } => {
                self.close_block();
                self.out.push(Heading::render(level, text));
            }
            LineClass::Rule => {
                self.close_block();
                self.out.push(Rule::HTML.to_string());
            }
            LineClass::Bullet(text) => self.push_list_item(ListKind::Unordered, text),
            LineClass::Numbered(text) => self.push_list_item(ListKind::Ordered, text),
            LineClass::Text(text) => {
                self.close_block();
                self.out
                    .push(format!("<p class=\"mdx-p\">{}</p>", parse_inline(text)));
            }
        }
    }

    /// Flushes anything still open and joins the emitted fragments.
    pub fn finish(mut self) -> String {
        // EOF flush
        self.close_block();
        self.out.join("\n")
    }

    fn push_table_row(&mut self, row: &str) {
        if let OpenBlock::Table(rows) = &mut self.open {
            rows.push(row.to_string());
            return;
        }
        self.close_block();
        self.open = OpenBlock::Table(vec![row.to_string()]);
    }

    fn push_quote_line(&mut self, text: &str) {
        if !matches!(self.open, OpenBlock::BlockQuote(_)) {
            self.close_block();
            self.open = OpenBlock::BlockQuote(vec![]);
        }
        if let (OpenBlock::BlockQuote(fragments), Some(fragment)) =
            (&mut self.open, BlockQuote::fragment(text))
        {
            fragments.push(fragment);
        }
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str) {
        if self.open != OpenBlock::List(kind) {
            self.close_block();
            self.out.push(kind.open_tag().to_string());
            self.open = OpenBlock::List(kind);
        }
        self.out.push(ListItem::render(text));
    }

    fn close_block(&mut self) {
        match std::mem::replace(&mut self.open, OpenBlock::None) {
            OpenBlock::None => {}
            OpenBlock::List(kind) => self.out.push(kind.close_tag().to_string()),
            OpenBlock::Table(rows) => match Table::render(&rows) {
                Some(html) => self.out.push(html),
                None => log::debug!("dropping table with {} row(s): no separator", rows.len()),
            },
            OpenBlock::BlockQuote(fragments) => {
                if !fragments.is_empty() {
                    self.out.push(BlockQuote::render(&fragments));
                }
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
