mod stylesheet;

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde_json::Value;
use tracing::debug;

use crate::application::parser::{ParseError, parse};
use crate::application::render::types::{DocumentRenderer, RenderedDocument};

pub use stylesheet::Stylesheet;

/// Default renderer: block fragments joined by newlines inside `<body>`,
/// preceded by a `<head>` carrying the bundled stylesheet.
#[derive(Debug, Clone, Default)]
pub struct HtmlDocumentRenderer {
    stylesheet: Stylesheet,
}

impl HtmlDocumentRenderer {
    pub fn new(stylesheet: Stylesheet) -> Self {
        Self { stylesheet }
    }

    pub fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }
}

static DOCUMENT_RENDERER: Lazy<Arc<HtmlDocumentRenderer>> =
    Lazy::new(|| Arc::new(HtmlDocumentRenderer::new(Stylesheet::bundled())));

/// Access the shared renderer instance, initialised on first use.
pub fn document_renderer() -> Arc<HtmlDocumentRenderer> {
    Arc::clone(&DOCUMENT_RENDERER)
}

impl DocumentRenderer for HtmlDocumentRenderer {
    fn render_document(
        &self,
        content: &Value,
        sanitize: bool,
    ) -> Result<RenderedDocument, ParseError> {
        let document = parse(content)?;
        let fragments = document.render_fragments(sanitize);

        debug!(
            target = "application::render",
            blocks = document.len(),
            sanitize,
            "rendered document"
        );

        Ok(RenderedDocument {
            head: self.stylesheet.head_element(),
            body: format!("<body>{}</body>", fragments.join("\n")),
            block_count: document.len(),
        })
    }
}
