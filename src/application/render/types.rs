use std::fmt;

use serde_json::Value;

use crate::application::parser::ParseError;

/// Rendered document split into its two top-level parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// `<head>` element embedding the stylesheet.
    pub head: String,
    /// `<body>` element holding one fragment per block, newline separated.
    pub body: String,
    /// Number of blocks that made it into the body.
    pub block_count: usize,
}

impl RenderedDocument {
    /// Concatenate head and body. No doctype or `<html>` root is added.
    pub fn into_html(self) -> String {
        let mut html = self.head;
        html.push_str(&self.body);
        html
    }
}

impl fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.head, self.body)
    }
}

/// Trait exposed by the rendering pipeline. Implementations must be pure and
/// deterministic: given the same input, they return identical outputs or errors.
pub trait DocumentRenderer: Send + Sync {
    fn render_document(
        &self,
        content: &Value,
        sanitize: bool,
    ) -> Result<RenderedDocument, ParseError>;

    fn render(&self, content: &Value, sanitize: bool) -> Result<String, ParseError> {
        self.render_document(content, sanitize)
            .map(RenderedDocument::into_html)
    }
}
