use async_trait::async_trait;
use std::sync::LazyLock;
use syntect::{
    highlighting::ThemeSet,
    html::highlighted_html_for_string,
    parsing::{SyntaxReference, SyntaxSet},
};

use super::{HighlightError, HighlightOptions, Highlighter};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// [`Highlighter`] backed by syntect's bundled grammars and themes.
///
/// Produces inline-styled `<pre>` fragments, so no stylesheet is needed.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectHighlighter;

impl SyntectHighlighter {
    pub const DEFAULT_THEME: &'static str = "base16-ocean.dark";

    /// Typed JavaScript and its markup extension. syntect ships no grammar
    /// for either; both are highlighted with the JavaScript grammar.
    const TYPESCRIPT_ALIASES: [&'static str; 3] = ["ts", "typescript", "tsx"];
    const JAVASCRIPT_TOKEN: &'static str = "js";

    /// Names of the themes that can be passed in [`HighlightOptions::theme`].
    pub fn theme_names() -> impl Iterator<Item = &'static str> {
        THEME_SET.themes.keys().map(String::as_str)
    }

    fn find_syntax(lang: &str) -> Option<&'static SyntaxReference> {
        let lang = lang.to_ascii_lowercase();
        if lang.is_empty() || lang == "text" || lang == "plaintext" {
            return Some(SYNTAX_SET.find_syntax_plain_text());
        }
        if Self::TYPESCRIPT_ALIASES.iter().any(|alias| *alias == lang) {
            return SYNTAX_SET.find_syntax_by_token(Self::JAVASCRIPT_TOKEN);
        }
        SYNTAX_SET.find_syntax_by_token(&lang)
    }
}

#[async_trait]
impl Highlighter for SyntectHighlighter {
    async fn highlight(
        &self,
        code: &str,
        options: &HighlightOptions,
    ) -> Result<String, HighlightError> {
        let syntax = Self::find_syntax(&options.lang)
            .ok_or_else(|| HighlightError::UnsupportedLanguage(options.lang.clone()))?;
        let theme = THEME_SET
            .themes
            .get(&options.theme)
            .ok_or_else(|| HighlightError::UnknownTheme(options.theme.clone()))?;

        let html = highlighted_html_for_string(code, &SYNTAX_SET, syntax, theme)?;
        // syntect puts a line break right after the opening <pre> tag
        Ok(html.replacen(">\n", ">", 1).trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    fn highlight(code: &str, lang: &str) -> Result<String, HighlightError> {
        block_on(SyntectHighlighter.highlight(
            code,
            &HighlightOptions::new(lang, SyntectHighlighter::DEFAULT_THEME),
        ))
    }

    #[test]
    fn highlights_known_language() {
        let html = highlight("fn main() {}", "rust").unwrap();
        assert!(html.starts_with("<pre style="));
        assert!(html.ends_with("</pre>"));
        assert!(html.contains("<span"));
        assert!(html.contains("main"));
    }

    #[test]
    fn resolves_by_extension() {
        assert!(highlight("fn main() {}", "rs").is_ok());
        assert!(highlight("print(1)", "py").is_ok());
    }

    #[test]
    fn typescript_aliases_are_supported() {
        assert!(highlight("const a: number = 1;", "ts").is_ok());
        assert!(highlight("const a: number = 1;", "typescript").is_ok());
        assert!(highlight("const el = <div />;", "tsx").is_ok());
    }

    #[test]
    fn text_is_plain() {
        let html = highlight("just <words>", "text").unwrap();
        assert!(html.contains("&lt;words&gt;"));
    }

    #[test]
    fn unknown_language_is_an_error() {
        assert!(matches!(
            highlight("x", "no-such-language"),
            Err(HighlightError::UnsupportedLanguage(lang)) if lang == "no-such-language"
        ));
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let result = block_on(
            SyntectHighlighter.highlight("x", &HighlightOptions::new("rust", "no-such-theme")),
        );
        assert!(matches!(result, Err(HighlightError::UnknownTheme(_))));
    }

    #[test]
    fn default_theme_is_bundled() {
        assert!(
            SyntectHighlighter::theme_names().any(|t| t == SyntectHighlighter::DEFAULT_THEME)
        );
    }
}
