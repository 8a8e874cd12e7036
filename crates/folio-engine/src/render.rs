use crate::{
    highlight::{CachedHighlighter, Highlighter, SyntectHighlighter, highlight_code_blocks},
    parsing::parse_markdown,
    toc::{TocEntry, heading_index},
};

/// HTML for a document plus the headings a table of contents links to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub html: String,
    pub headings: Vec<TocEntry>,
}

/// Highlights code blocks, then line-parses the result into HTML.
///
/// The output is not sanitized; it is meant for author-controlled content.
pub async fn render_markdown(markdown: &str, highlighter: &dyn Highlighter, theme: &str) -> String {
    let substituted = highlight_code_blocks(markdown, highlighter, theme).await;
    parse_markdown(&substituted)
}

/// Owns a highlighter and theme for rendering many documents.
pub struct Renderer {
    highlighter: Box<dyn Highlighter>,
    theme: String,
}

impl Renderer {
    pub fn new(highlighter: impl Highlighter + 'static, theme: impl Into<String>) -> Self {
        Self {
            highlighter: Box::new(highlighter),
            theme: theme.into(),
        }
    }

    pub fn syntect(theme: impl Into<String>) -> Self {
        Self::new(SyntectHighlighter, theme)
    }

    /// Like [`Renderer::syntect`], but reuses highlighted output across renders.
    pub fn cached_syntect(theme: impl Into<String>) -> Self {
        Self::new(CachedHighlighter::new(SyntectHighlighter), theme)
    }

    pub fn theme(&self) -> &str {
        &self.theme
    }

    pub async fn render_html(&self, markdown: &str) -> String {
        render_markdown(markdown, self.highlighter.as_ref(), &self.theme).await
    }

    pub async fn render(&self, markdown: &str) -> RenderedDocument {
        RenderedDocument {
            html: self.render_html(markdown).await,
            headings: heading_index(markdown),
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::syntect(SyntectHighlighter::DEFAULT_THEME)
    }
}
