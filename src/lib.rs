//! Render Editor.js block documents as HTML.
//!
//! The library takes an already-decoded JSON value, resolves its `blocks`
//! through a fixed registry of block types and renders each one to an HTML
//! fragment. [`render`] wraps the fragments in a `<body>` and prepends a
//! `<head>` carrying the bundled stylesheet.
//!
//! ```no_run
//! let content = serde_json::json!({
//!     "blocks": [{ "type": "paragraph", "data": { "text": "Hello" } }]
//! });
//! let html = editorjs_html::render(&content, true)?;
//! # Ok::<(), editorjs_html::ParseError>(())
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;

use serde_json::Value;

pub use application::parser::{DocumentParser, ParseError, parse};
pub use application::render::{
    DocumentRenderer, HtmlDocumentRenderer, RenderedDocument, Stylesheet, document_renderer,
};
pub use domain::blocks::{Block, BlockKind};
pub use domain::document::ParsedDocument;

/// Render a decoded Editor.js document with the shared renderer.
pub fn render(content: &Value, sanitize: bool) -> Result<String, ParseError> {
    document_renderer().render(content, sanitize)
}
