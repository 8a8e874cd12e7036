use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Strong and regular emphasis with asterisk delimiters.
pub struct Emphasis;

impl Emphasis {
    /// Backslash-escaped asterisk, rendered as a literal `*`.
    pub const ESCAPED: &'static str = r"\*";
    /// Character reference for `*` that no emphasis rule can match.
    pub const LITERAL_STAR: &'static str = "&#42;";

    fn strong_em() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\*\*\*(.+?)\*\*\*").expect("Invalid strong-em regex"))
    }

    fn strong() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid strong regex"))
    }

    fn em() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\*(.+?)\*").expect("Invalid em regex"))
    }

    /// Applies escapes then emphasis, longest delimiter first.
    ///
    /// A pair whose content would cross a tag opened or closed by an earlier
    /// rule is left as literal asterisks, so output is always well nested.
    pub fn render(text: &str) -> String {
        let text = text.replace(Self::ESCAPED, Self::LITERAL_STAR);
        let text = Self::strong_em().replace_all(&text, |caps: &Captures| {
            Self::wrap(caps, "<strong><em>", "</em></strong>")
        });
        let text = Self::strong()
            .replace_all(&text, |caps: &Captures| Self::wrap(caps, "<strong>", "</strong>"));
        Self::em()
            .replace_all(&text, |caps: &Captures| Self::wrap(caps, "<em>", "</em>"))
            .into_owned()
    }

    fn wrap(caps: &Captures, open: &str, close: &str) -> String {
        let inner = &caps[1];
        if Self::is_balanced(inner) {
            format!("{open}{inner}{close}")
        } else {
            caps[0].to_string()
        }
    }

    fn is_balanced(html: &str) -> bool {
        ["strong", "em"].iter().all(|tag| {
            html.matches(&format!("<{tag}>")).count() == html.matches(&format!("</{tag}>")).count()
        })
    }
}
