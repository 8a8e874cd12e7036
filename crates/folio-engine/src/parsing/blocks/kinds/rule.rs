/// Thematic break.
pub struct Rule;

impl Rule {
    pub const MARKERS: [&'static str; 3] = ["---", "***", "___"];
    pub const HTML: &'static str = "<hr class=\"mdx-hr\" />";

    pub fn matches(line: &str) -> bool {
        Self::MARKERS.iter().any(|m| *m == line)
    }
}
