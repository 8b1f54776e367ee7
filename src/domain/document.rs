use super::blocks::Block;

/// Ordered, immutable sequence of blocks produced by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDocument {
    blocks: Vec<Block>,
}

impl ParsedDocument {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Render every block in order, one fragment per block.
    pub fn render_fragments(&self, sanitize: bool) -> Vec<String> {
        self.blocks
            .iter()
            .map(|block| block.render(sanitize))
            .collect()
    }
}

impl IntoIterator for ParsedDocument {
    type Item = Block;
    type IntoIter = std::vec::IntoIter<Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedDocument {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
