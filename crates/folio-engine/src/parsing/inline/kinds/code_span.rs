/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones" - no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Characters later inline rules match on, with the character references
    /// that display identically but match nothing.
    const INERT: [(char, &'static str); 3] = [('*', "&#42;"), ('[', "&#91;"), ('`', "&#96;")];

    /// Renders the raw content of a code span.
    ///
    /// Delimiter characters are written as character references so the
    /// output can be inline-parsed again without change.
    pub fn render(inner: &str) -> String {
        let mut content = String::with_capacity(inner.len());
        for c in inner.chars() {
            match Self::INERT.iter().find(|(raw, _)| *raw == c) {
                Some((_, reference)) => content.push_str(reference),
                None => content.push(c),
            }
        }
        format!("<code class=\"mdx-code\">{content}</code>")
    }
}
