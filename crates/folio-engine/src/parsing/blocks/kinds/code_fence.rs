/// Fenced code block syntax, shared by the highlighting pre-pass, the line
/// scanner and the heading index.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Opening tag of a rendered code block. The pre-pass writes every
    /// rendered block on one line starting with this tag.
    pub const CONTAINER_OPEN: &'static str = "<div class=\"mdx-code-block\">";

    /// Whether a trimmed line is an already rendered code block.
    pub fn is_container(line: &str) -> bool {
        line.starts_with(Self::CONTAINER_OPEN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_container() {
        assert!(CodeFence::is_container(
            "<div class=\"mdx-code-block\"><div class=\"mdx-code-header\">"
        ));
        assert!(!CodeFence::is_container("<div>"));
    }
}
