use serde::Deserialize;
use serde_json::Value;

use super::{BlockKind, decode_payload};
use crate::domain::{error::BlockError, sanitize::inline_text};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TableBlock {
    #[serde(default)]
    pub content: Vec<Vec<String>>,
    #[serde(default, rename = "withHeadings")]
    pub with_headings: bool,
}

impl TableBlock {
    pub fn from_data(data: &Value) -> Result<Self, BlockError> {
        decode_payload(BlockKind::Table, data)
    }

    /// Split rows into the optional heading row and the body rows.
    fn sections(&self) -> (Option<&[String]>, &[Vec<String>]) {
        match self.content.split_first() {
            Some((first, rest)) if self.with_headings => (Some(first.as_slice()), rest),
            _ => (None, self.content.as_slice()),
        }
    }

    pub fn render(&self, sanitize: bool) -> String {
        let (heading, rows) = self.sections();
        let mut html = String::from("<table>");

        if let Some(cells) = heading {
            html.push_str("<thead>");
            push_row(&mut html, "th", cells, sanitize);
            html.push_str("</thead>");
        }

        if !rows.is_empty() {
            html.push_str("<tbody>");
            for row in rows {
                push_row(&mut html, "td", row, sanitize);
            }
            html.push_str("</tbody>");
        }

        html.push_str("</table>");
        html
    }
}

fn push_row(html: &mut String, cell_tag: &str, cells: &[String], sanitize: bool) {
    html.push_str("<tr>");
    for cell in cells {
        html.push_str(&format!(
            "<{cell_tag}>{}</{cell_tag}>",
            inline_text(cell, sanitize)
        ));
    }
    html.push_str("</tr>");
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_body_rows_without_headings() {
        let block = TableBlock::from_data(&json!({
            "content": [["a", "b"], ["c", "d"]]
        }))
        .unwrap();
        assert!(!block.with_headings);
        assert_eq!(
            block.render(false),
            "<table><tbody><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></tbody></table>"
        );
    }

    #[test]
    fn first_row_becomes_heading_when_requested() {
        let block = TableBlock::from_data(&json!({
            "withHeadings": true,
            "content": [["Name", "Age"], ["Ada", "36"]]
        }))
        .unwrap();
        assert_eq!(
            block.render(false),
            "<table><thead><tr><th>Name</th><th>Age</th></tr></thead><tbody><tr><td>Ada</td><td>36</td></tr></tbody></table>"
        );
    }

    #[test]
    fn heading_only_table_has_no_body() {
        let block = TableBlock::from_data(&json!({
            "withHeadings": true,
            "content": [["only"]]
        }))
        .unwrap();
        assert_eq!(
            block.render(false),
            "<table><thead><tr><th>only</th></tr></thead></table>"
        );
    }

    #[test]
    fn empty_table_renders_bare_element() {
        let block = TableBlock::from_data(&json!({ "withHeadings": true })).unwrap();
        assert_eq!(block.render(true), "<table></table>");
    }

    #[test]
    fn malformed_rows_and_cells_are_rejected() {
        assert!(TableBlock::from_data(&json!({ "content": ["a", "b"] })).is_err());
        assert!(TableBlock::from_data(&json!({ "content": [[1, 2]] })).is_err());
        assert!(TableBlock::from_data(&json!({ "withHeadings": "yes" })).is_err());
    }

    #[test]
    fn cells_are_sanitized() {
        let block = TableBlock::from_data(&json!({
            "content": [["<a href=\"javascript:x()\" onclick=\"y()\">c</a>"]]
        }))
        .unwrap();
        let html = block.render(true);
        assert!(!html.contains("javascript:"), "{html}");
        assert!(!html.contains("onclick"), "{html}");
    }
}
