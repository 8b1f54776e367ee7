//! Editor.js block model.
//!
//! Every supported block type is one variant of [`Block`], carrying a payload
//! validated when the block is built from its entry's `data` object. Blocks
//! are immutable and render to standalone HTML fragments.

mod delimiter;
mod header;
mod image;
mod list;
mod paragraph;
mod table;

use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::BlockError;

pub use delimiter::DelimiterBlock;
pub use header::{HeaderBlock, HeadingLevel, InvalidHeadingLevel};
pub use image::{ImageBlock, ImageFile};
pub use list::{ListBlock, ListItem, ListStyle};
pub use paragraph::ParagraphBlock;
pub use table::TableBlock;

/// Discriminator of a supported block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Header,
    Paragraph,
    List,
    Table,
    Delimiter,
    Image,
}

impl BlockKind {
    pub const ALL: [BlockKind; 6] = [
        BlockKind::Header,
        BlockKind::Paragraph,
        BlockKind::List,
        BlockKind::Table,
        BlockKind::Delimiter,
        BlockKind::Image,
    ];

    /// The `type` string Editor.js writes for this block.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Header => "header",
            BlockKind::Paragraph => "paragraph",
            BlockKind::List => "list",
            BlockKind::Table => "table",
            BlockKind::Delimiter => "delimiter",
            BlockKind::Image => "image",
        }
    }

    /// Exact, case-sensitive match on the entry's `type` string.
    pub fn from_discriminator(discriminator: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == discriminator)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Header(HeaderBlock),
    Paragraph(ParagraphBlock),
    List(ListBlock),
    Table(TableBlock),
    Delimiter(DelimiterBlock),
    Image(ImageBlock),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Header(_) => BlockKind::Header,
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::List(_) => BlockKind::List,
            Block::Table(_) => BlockKind::Table,
            Block::Delimiter(_) => BlockKind::Delimiter,
            Block::Image(_) => BlockKind::Image,
        }
    }

    /// Render the block as an HTML fragment.
    ///
    /// With `sanitize` set, every piece of user-supplied text passes through
    /// the inline allow-list; otherwise content is emitted as-is.
    pub fn render(&self, sanitize: bool) -> String {
        match self {
            Block::Header(block) => block.render(sanitize),
            Block::Paragraph(block) => block.render(sanitize),
            Block::List(block) => block.render(sanitize),
            Block::Table(block) => block.render(sanitize),
            Block::Delimiter(block) => block.render(sanitize),
            Block::Image(block) => block.render(sanitize),
        }
    }
}

fn decode_payload<T: DeserializeOwned>(kind: BlockKind, data: &Value) -> Result<T, BlockError> {
    T::deserialize(data).map_err(|err| BlockError::invalid_data(kind, err))
}
