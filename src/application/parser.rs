//! Editor.js document parser.
//!
//! Validates the top-level shape of a decoded document and resolves each entry
//! of its `blocks` array through the block registry. Entries whose `type` is
//! not registered are dropped so documents written by newer editors with extra
//! block tools still render; a malformed payload of a known type aborts the
//! whole parse.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::domain::{
    blocks::{Block, BlockKind},
    document::ParsedDocument,
    error::BlockError,
    registry,
};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("content must be an object, not {found}")]
    NotAnObject { found: &'static str },
    #[error("`blocks` must be an array, not {found}")]
    BlocksNotAnArray { found: &'static str },
    #[error("block #{index} of type `{kind}` is malformed: {source}")]
    Block {
        index: usize,
        kind: BlockKind,
        #[source]
        source: BlockError,
    },
}

/// Parser bound to one decoded document.
///
/// The root is checked when the parser is created; [`DocumentParser::blocks`]
/// performs the remaining validation.
#[derive(Debug, Clone, Copy)]
pub struct DocumentParser<'a> {
    content: &'a Map<String, Value>,
}

impl<'a> DocumentParser<'a> {
    pub fn new(content: &'a Value) -> Result<Self, ParseError> {
        let content = content.as_object().ok_or(ParseError::NotAnObject {
            found: json_type_name(content),
        })?;
        Ok(Self { content })
    }

    /// Build every recognised block in document order.
    #[instrument(level = "debug", skip(self))]
    pub fn blocks(&self) -> Result<ParsedDocument, ParseError> {
        let entries = match self.content.get("blocks") {
            None => return Ok(ParsedDocument::default()),
            Some(Value::Array(entries)) => entries,
            Some(other) => {
                return Err(ParseError::BlocksNotAnArray {
                    found: json_type_name(other),
                });
            }
        };

        let mut blocks = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if let Some(block) = build_entry(index, entry)? {
                blocks.push(block);
            }
        }

        Ok(ParsedDocument::new(blocks))
    }

    /// Iterate the parsed blocks without rendering them.
    pub fn iter(&self) -> Result<std::vec::IntoIter<Block>, ParseError> {
        Ok(self.blocks()?.into_iter())
    }
}

/// Parse a decoded Editor.js document into its ordered block sequence.
pub fn parse(content: &Value) -> Result<ParsedDocument, ParseError> {
    DocumentParser::new(content)?.blocks()
}

fn build_entry(index: usize, entry: &Value) -> Result<Option<Block>, ParseError> {
    let Some(entry) = entry.as_object() else {
        debug!(
            target = "application::parser",
            index,
            found = json_type_name(entry),
            "skipping non-object block entry"
        );
        return Ok(None);
    };

    let Some(discriminator) = entry.get("type").and_then(Value::as_str) else {
        debug!(
            target = "application::parser",
            index, "skipping block entry without a string `type`"
        );
        return Ok(None);
    };

    let Some(construct) = registry::lookup(discriminator) else {
        debug!(
            target = "application::parser",
            index,
            block_type = discriminator,
            "skipping unrecognised block type"
        );
        return Ok(None);
    };

    let empty = Value::Object(Map::new());
    let data = entry
        .get("data")
        .filter(|data| !data.is_null())
        .unwrap_or(&empty);

    construct(data).map(Some).map_err(|source| ParseError::Block {
        index,
        kind: source.kind(),
        source,
    })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
