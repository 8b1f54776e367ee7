use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::{BlockKind, decode_payload};
use crate::domain::{error::BlockError, sanitize::inline_text};

/// Heading level in `1..=6`; Editor.js entries without a level render as `h1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(try_from = "i64")]
pub struct HeadingLevel(u8);

#[derive(Debug, Error, PartialEq, Eq)]
#[error("heading level must be between 1 and 6, got {0}")]
pub struct InvalidHeadingLevel(pub i64);

impl HeadingLevel {
    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<i64> for HeadingLevel {
    type Error = InvalidHeadingLevel;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match u8::try_from(value) {
            Ok(level @ 1..=6) => Ok(Self(level)),
            _ => Err(InvalidHeadingLevel(value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderBlock {
    pub text: String,
    #[serde(default)]
    pub level: HeadingLevel,
}

impl HeaderBlock {
    pub fn from_data(data: &Value) -> Result<Self, BlockError> {
        decode_payload(BlockKind::Header, data)
    }

    pub fn render(&self, sanitize: bool) -> String {
        let level = self.level.get();
        let text = inline_text(&self.text, sanitize);
        format!("<h{level}>{text}</h{level}>")
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn renders_exact_heading_markup() {
        let block = HeaderBlock::from_data(&json!({ "text": "Hi", "level": 2 })).unwrap();
        assert_eq!(block.render(false), "<h2>Hi</h2>");
    }

    #[test]
    fn level_defaults_to_one() {
        let block = HeaderBlock::from_data(&json!({ "text": "Title" })).unwrap();
        assert_eq!(block.level.get(), 1);
        assert_eq!(block.render(false), "<h1>Title</h1>");
    }

    #[test]
    fn rejects_out_of_range_levels() {
        for level in [0, 7, -1, 300] {
            let err = HeaderBlock::from_data(&json!({ "text": "x", "level": level })).unwrap_err();
            assert_eq!(err.kind(), BlockKind::Header);
            assert!(err.to_string().contains("heading level"), "{err}");
        }
    }

    #[test]
    fn rejects_non_integer_levels() {
        assert!(HeaderBlock::from_data(&json!({ "text": "x", "level": "2" })).is_err());
        assert!(HeaderBlock::from_data(&json!({ "text": "x", "level": 2.5 })).is_err());
    }

    #[test]
    fn text_is_required() {
        let err = HeaderBlock::from_data(&json!({ "level": 2 })).unwrap_err();
        assert!(err.to_string().contains("missing field `text`"), "{err}");
    }

    #[test]
    fn sanitizes_text_when_requested() {
        let block = HeaderBlock::from_data(&json!({
            "text": "<i>Hi</i><img src=x onerror=alert(1)>",
            "level": 3
        }))
        .unwrap();
        assert_eq!(block.render(true), "<h3><i>Hi</i></h3>");
    }
}
