//! # Code Highlighting
//!
//! The pre-pass that runs before line parsing: every fenced code block in a
//! document is highlighted and replaced by a single-line HTML container.
//!
//! ## Modules
//!
//! - **`fence`**: fenced block detection and the container markup
//! - **`syntect_backend`**: the default [`Highlighter`] built on syntect
//! - **`cache`**: a memoizing [`Highlighter`] decorator
//!
//! Highlighting never fails from the caller's point of view: any
//! [`HighlightError`] is logged and the block is rendered escaped instead.

pub mod cache;
pub mod fence;
pub mod syntect_backend;

use async_trait::async_trait;
use futures::future::join_all;
use thiserror::Error;

pub use cache::CachedHighlighter;
pub use fence::{FencedBlock, find_fenced_blocks};
pub use syntect_backend::SyntectHighlighter;

#[derive(Debug, Error)]
pub enum HighlightError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Highlighter failed: {0}")]
    Backend(#[from] syntect::Error),
}

/// What to highlight a snippet as.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HighlightOptions {
    /// Language label as written after the opening fence (`text` if none).
    pub lang: String,
    pub theme: String,
}

impl HighlightOptions {
    pub fn new(lang: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            theme: theme.into(),
        }
    }
}

/// Turns source text into an HTML fragment with syntax highlighting applied.
#[async_trait]
pub trait Highlighter: Send + Sync {
    /// Fails when the language (or theme) is not supported.
    async fn highlight(&self, code: &str, options: &HighlightOptions)
    -> Result<String, HighlightError>;
}

/// Replaces every fenced code block in `doc` with its rendered container.
///
/// Blocks are highlighted concurrently. Each result is spliced back by the
/// exact text of the block it came from, so completion order does not matter.
pub async fn highlight_code_blocks(doc: &str, highlighter: &dyn Highlighter, theme: &str) -> String {
    let blocks = find_fenced_blocks(doc);
    if blocks.is_empty() {
        return doc.to_string();
    }

    let rendered = join_all(
        blocks
            .iter()
            .map(|block| render_block(block, highlighter, theme)),
    )
    .await;

    let mut out = doc.to_string();
    for (block, html) in blocks.iter().zip(rendered) {
        out = out.replacen(block.source, &html, 1);
    }
    out
}

async fn render_block(block: &FencedBlock<'_>, highlighter: &dyn Highlighter, theme: &str) -> String {
    let options = HighlightOptions::new(block.lang, theme);
    let inner = match highlighter.highlight(block.code, &options).await {
        Ok(html) => html,
        Err(e) => {
            log::warn!("Rendering `{}` code block without highlighting: {e}", block.lang);
            fence::fallback_html(block.lang, block.code)
        }
    };
    fence::render_container(block.lang, &inner)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use futures::future::poll_fn;
    use std::{
        sync::{
            Mutex, PoisonError,
            atomic::{AtomicUsize, Ordering},
        },
        task::Poll,
    };

    /// Wraps code in a marker element and counts calls.
    #[derive(Default)]
    pub struct MarkerHighlighter {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl Highlighter for MarkerHighlighter {
        async fn highlight(
            &self,
            code: &str,
            options: &HighlightOptions,
        ) -> Result<String, HighlightError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!(
                "<pre class=\"hl-{}\">{}</pre>",
                options.lang,
                code.to_uppercase()
            ))
        }
    }

    /// Treats each snippet as the number of times to yield before finishing,
    /// and records the order in which snippets complete.
    #[derive(Default)]
    pub struct DelayedHighlighter {
        pub completed: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Highlighter for DelayedHighlighter {
        async fn highlight(
            &self,
            code: &str,
            options: &HighlightOptions,
        ) -> Result<String, HighlightError> {
            let code = code.trim();
            let mut remaining: usize = code.parse().unwrap_or(0);
            poll_fn(|cx| {
                if remaining == 0 {
                    Poll::Ready(())
                } else {
                    remaining -= 1;
                    cx.waker().wake_by_ref();
                    Poll::Pending
                }
            })
            .await;

            self.completed
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(code.to_string());
            Ok(format!("<pre class=\"hl-{}\">{code}</pre>", options.lang))
        }
    }

    /// Supports no language at all.
    pub struct UnavailableHighlighter;

    #[async_trait]
    impl Highlighter for UnavailableHighlighter {
        async fn highlight(
            &self,
            _code: &str,
            options: &HighlightOptions,
        ) -> Result<String, HighlightError> {
            Err(HighlightError::UnsupportedLanguage(options.lang.clone()))
        }
    }
}
