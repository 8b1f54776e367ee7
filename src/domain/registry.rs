//! Fixed mapping from an entry's `type` string to the constructor of its block.

use serde_json::Value;

use super::{
    blocks::{
        Block, BlockKind, DelimiterBlock, HeaderBlock, ImageBlock, ListBlock, ParagraphBlock,
        TableBlock,
    },
    error::BlockError,
};

/// Builds a block from its entry's `data` object.
pub type BlockConstructor = fn(&Value) -> Result<Block, BlockError>;

/// Resolve a discriminator to its constructor. Unknown types yield `None`.
pub fn lookup(discriminator: &str) -> Option<BlockConstructor> {
    BlockKind::from_discriminator(discriminator).map(constructor)
}

pub fn constructor(kind: BlockKind) -> BlockConstructor {
    match kind {
        BlockKind::Header => build_header,
        BlockKind::Paragraph => build_paragraph,
        BlockKind::List => build_list,
        BlockKind::Table => build_table,
        BlockKind::Delimiter => build_delimiter,
        BlockKind::Image => build_image,
    }
}

fn build_header(data: &Value) -> Result<Block, BlockError> {
    HeaderBlock::from_data(data).map(Block::Header)
}

fn build_paragraph(data: &Value) -> Result<Block, BlockError> {
    ParagraphBlock::from_data(data).map(Block::Paragraph)
}

fn build_list(data: &Value) -> Result<Block, BlockError> {
    ListBlock::from_data(data).map(Block::List)
}

fn build_table(data: &Value) -> Result<Block, BlockError> {
    TableBlock::from_data(data).map(Block::Table)
}

fn build_delimiter(_data: &Value) -> Result<Block, BlockError> {
    Ok(Block::Delimiter(DelimiterBlock))
}

fn build_image(data: &Value) -> Result<Block, BlockError> {
    ImageBlock::from_data(data).map(Block::Image)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn every_kind_resolves_to_a_matching_constructor() {
        let samples = [
            ("header", json!({ "text": "h", "level": 2 })),
            ("paragraph", json!({ "text": "p" })),
            ("list", json!({ "items": ["i"] })),
            ("table", json!({ "content": [["c"]] })),
            ("delimiter", json!({})),
            ("image", json!({ "file": { "url": "a.png" } })),
        ];

        for (discriminator, data) in samples {
            let construct = lookup(discriminator).expect("registered type");
            let block = construct(&data).expect("valid payload");
            assert_eq!(block.kind().as_str(), discriminator);
        }
    }

    #[test]
    fn unknown_types_are_not_found() {
        assert!(lookup("bogus").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("Paragraph").is_none());
    }

    #[test]
    fn delimiter_ignores_its_payload() {
        let construct = lookup("delimiter").expect("registered type");
        assert!(construct(&json!("anything")).is_ok());
    }
}
