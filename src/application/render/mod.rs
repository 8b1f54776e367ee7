//! Document rendering.
//!
//! The renderer is pure: it accepts a decoded Editor.js document, produces
//! deterministic HTML and surfaces parse failures as structured errors. Any
//! I/O (reading the document, writing the result) belongs to the caller.

mod service;
mod types;

pub use service::{HtmlDocumentRenderer, Stylesheet, document_renderer};
pub use types::{DocumentRenderer, RenderedDocument};
