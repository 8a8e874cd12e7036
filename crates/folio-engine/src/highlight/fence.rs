use regex::Regex;
use std::sync::OnceLock;

use crate::{escape::escape_html, parsing::blocks::kinds::CodeFence};

/// Language label used when a fence declares none.
pub const DEFAULT_LANGUAGE: &str = "text";

/// Character reference written in place of newlines inside a container, so
/// the whole block stays on one line for the line scanner.
const NEWLINE_REF: &str = "&#10;";

fn fence_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let fence = regex::escape(CodeFence::BACKTICKS);
        Regex::new(&format!(
            r"(?m)^[ \t]*{fence}([^\s`]*)[ \t]*\r?\n((?s:.*?))^[ \t]*{fence}[ \t]*\r?$"
        ))
        .expect("Invalid code fence regex")
    })
}

/// A fenced code block found in the raw document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FencedBlock<'a> {
    /// The exact text of the block, fences included.
    pub source: &'a str,
    /// The declared language, or [`DEFAULT_LANGUAGE`].
    pub lang: &'a str,
    /// The code between the fences, without its final line break.
    pub code: &'a str,
}

/// Finds every closed fenced code block, in document order.
///
/// An opening fence without a matching closing fence is left alone and will
/// be parsed as ordinary text.
pub fn find_fenced_blocks(doc: &str) -> Vec<FencedBlock<'_>> {
    fence_regex()
        .captures_iter(doc)
        .filter_map(|caps| {
            let source = caps.get(0)?.as_str();
            let lang = caps
                .get(1)
                .map(|m| m.as_str())
                .filter(|l| !l.is_empty())
                .unwrap_or(DEFAULT_LANGUAGE);
            let code = caps.get(2)?.as_str().trim_end_matches(['\r', '\n']);
            Some(FencedBlock { source, lang, code })
        })
        .collect()
}

/// Unhighlighted rendering: the code with only the five unsafe characters escaped.
pub fn fallback_html(lang: &str, code: &str) -> String {
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>",
        escape_html(lang),
        escape_html(code)
    )
}

/// Wraps highlighted (or fallback) HTML in the code block container.
///
/// The result never contains a line break.
pub fn render_container(lang: &str, inner: &str) -> String {
    let html = format!(
        "{}<div class=\"mdx-code-header\"><span class=\"mdx-code-lang\">{}</span></div><div class=\"mdx-code-content\">{}</div></div>",
        CodeFence::CONTAINER_OPEN,
        escape_html(lang),
        inner.trim_end_matches(['\r', '\n'])
    );
    html.replace("\r\n", NEWLINE_REF).replace('\n', NEWLINE_REF)
}
