use serde::Deserialize;
use serde_json::Value;

use super::{BlockKind, decode_payload};
use crate::domain::{error::BlockError, sanitize::inline_text};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParagraphBlock {
    pub text: String,
}

impl ParagraphBlock {
    pub fn from_data(data: &Value) -> Result<Self, BlockError> {
        decode_payload(BlockKind::Paragraph, data)
    }

    pub fn render(&self, sanitize: bool) -> String {
        format!("<p>{}</p>", inline_text(&self.text, sanitize))
    }
}
