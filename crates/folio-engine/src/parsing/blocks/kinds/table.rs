use crate::parsing::inline::parse_inline;

/// Pipe tables: a header row, a separator row, then data rows.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';

    /// A trimmed line that starts and ends with a pipe.
    pub fn is_row(line: &str) -> bool {
        line.len() >= 2 && line.starts_with(Self::PIPE) && line.ends_with(Self::PIPE)
    }

    /// Renders buffered raw rows.
    ///
    /// Returns `None` when there are fewer than two rows (no header plus
    /// separator); the second row is always dropped as the separator.
    pub fn render(rows: &[String]) -> Option<String> {
        let [header, _separator, body @ ..] = rows else {
            return None;
        };

        let mut html = String::from("<table class=\"mdx-table\"><thead>");
        html.push_str(&Self::render_row(header, "th"));
        html.push_str("</thead><tbody>");
        for row in body {
            html.push_str(&Self::render_row(row, "td"));
        }
        html.push_str("</tbody></table>");
        Some(html)
    }

    /// Splits on `|`; segments empty after trimming produce no cell.
    pub fn cells(row: &str) -> impl Iterator<Item = &str> {
        row.split(Self::PIPE).map(str::trim).filter(|c| !c.is_empty())
    }

    fn render_row(row: &str, tag: &str) -> String {
        let cells: String = Self::cells(row)
            .map(|cell| format!("<{tag} class=\"mdx-{tag}\">{}</{tag}>", parse_inline(cell)))
            .collect();
        format!("<tr>{cells}</tr>")
    }
}
