use regex::Regex;
use std::sync::OnceLock;

/// Inline link `[text](url)`.
///
/// The url is copied into `href` as written; nothing is validated or escaped.
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"))
    }

    pub fn render(text: &str) -> String {
        Self::regex()
            .replace_all(text, "<a href=\"${2}\" class=\"mdx-link\">${1}</a>")
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_link() {
        assert_eq!(
            Link::render("see [docs](https://example.com/a?b=c)"),
            "see <a href=\"https://example.com/a?b=c\" class=\"mdx-link\">docs</a>"
        );
    }

    #[test]
    fn url_is_not_escaped() {
        assert_eq!(
            Link::render("[x](/path\"quoted)"),
            "<a href=\"/path\"quoted\" class=\"mdx-link\">x</a>"
        );
    }

    #[test]
    fn incomplete_link_is_text() {
        assert_eq!(Link::render("[text] (url)"), "[text] (url)");
        assert_eq!(Link::render("[text](url"), "[text](url");
    }
}
