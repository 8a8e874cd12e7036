use regex::{Captures, Regex};
use std::sync::OnceLock;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
};

/// Marks the start of a masked code span; followed by its index.
const MASK_OPEN: char = '\u{E000}';
/// Marks the end of a masked code span.
const MASK_CLOSE: char = '\u{E001}';

fn mask_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("\u{E000}([0-9]+)\u{E001}").expect("Invalid mask regex"))
}

/// Renders inline markdown in `s` to HTML.
///
/// # Raw Zone Precedence
/// Code spans are cut out first and put back last, so `` `**x**` `` keeps its
/// asterisks while `` [`x`](url) `` still becomes a link around the code.
/// Mask characters already present in `s` are dropped.
pub fn parse_inline(s: &str) -> String {
    let s = s.replace([MASK_OPEN, MASK_CLOSE], "");
    let (masked, code_spans) = mask_code_spans(&s);
    let text = Emphasis::render(&masked);
    let text = Link::render(&text);
    unmask_code_spans(&text, &code_spans)
}

/// Replaces each code span with a private-use placeholder carrying its index.
fn mask_code_spans(s: &str) -> (String, Vec<&str>) {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut spans = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let start = cur.pos();
        if let Some(inner) = try_parse_code_span(&mut cur) {
            out.push_str(cur.slice(text_start, start));
            out.push(MASK_OPEN);
            out.push_str(&spans.len().to_string());
            out.push(MASK_CLOSE);
            spans.push(inner);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    out.push_str(cur.slice(text_start, cur.pos()));
    (out, spans)
}

fn unmask_code_spans(s: &str, spans: &[&str]) -> String {
    if spans.is_empty() {
        return s.to_string();
    }
    mask_regex()
        .replace_all(s, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| spans.get(i))
                .map(|inner| CodeSpan::render(inner))
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Attempts to parse a code span starting at the current position.
///
/// Returns the content between the backticks. Unclosed or empty spans return
/// `None` with the cursor restored.
fn try_parse_code_span<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
    if cur.peek() != Some(CodeSpan::TICK) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // `
    let inner_start = cur.pos();
    cur.bump_until(CodeSpan::TICK);
    let inner_end = cur.pos();

    if cur.peek() != Some(CodeSpan::TICK) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump(); // closing `

    Some(cur.slice(inner_start, inner_end))
}
